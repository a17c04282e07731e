//! Repository port for device persistence and lookup.

use crate::device::domain::{Device, DeviceId, NewDevice};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for device repository operations.
pub type DeviceRepositoryResult<T> = Result<T, DeviceRepositoryError>;

/// Device persistence contract.
#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// Stores a new device and returns it with its assigned identifier.
    async fn insert(&self, device: &NewDevice) -> DeviceRepositoryResult<Device>;

    /// Stores several devices in one operation, preserving input order.
    async fn insert_many(&self, devices: &[NewDevice]) -> DeviceRepositoryResult<Vec<Device>>;

    /// Finds a device by identifier.
    ///
    /// Returns `None` when the device does not exist.
    async fn find_by_id(&self, id: DeviceId) -> DeviceRepositoryResult<Option<Device>>;

    /// Returns whether a device with the identifier exists.
    async fn exists_by_id(&self, id: DeviceId) -> DeviceRepositoryResult<bool>;

    /// Returns every device ordered by identifier.
    async fn find_all(&self) -> DeviceRepositoryResult<Vec<Device>>;
}

/// Errors returned by device repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DeviceRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DeviceRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
