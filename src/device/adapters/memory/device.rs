//! In-memory repository for the device catalogue.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::device::{
    domain::{Device, DeviceId, NewDevice},
    ports::{DeviceRepository, DeviceRepositoryError, DeviceRepositoryResult},
};

/// Thread-safe in-memory device repository.
///
/// Identifiers are assigned from a counter starting at 1, mirroring a
/// database sequence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeviceRepository {
    state: Arc<RwLock<InMemoryDeviceState>>,
}

#[derive(Debug, Default)]
struct InMemoryDeviceState {
    devices: BTreeMap<DeviceId, Device>,
    last_id: i64,
}

impl InMemoryDeviceState {
    fn insert(&mut self, device: &NewDevice) -> Device {
        self.last_id += 1;
        let stored = device.clone().into_device(DeviceId::new(self.last_id));
        self.devices.insert(stored.id(), stored.clone());
        stored
    }
}

impl InMemoryDeviceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> DeviceRepositoryError {
    DeviceRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl DeviceRepository for InMemoryDeviceRepository {
    async fn insert(&self, device: &NewDevice) -> DeviceRepositoryResult<Device> {
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.insert(device))
    }

    async fn insert_many(&self, devices: &[NewDevice]) -> DeviceRepositoryResult<Vec<Device>> {
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(devices.iter().map(|device| state.insert(device)).collect())
    }

    async fn find_by_id(&self, id: DeviceId) -> DeviceRepositoryResult<Option<Device>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.devices.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: DeviceId) -> DeviceRepositoryResult<bool> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.devices.contains_key(&id))
    }

    async fn find_all(&self) -> DeviceRepositoryResult<Vec<Device>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.devices.values().cloned().collect())
    }
}
