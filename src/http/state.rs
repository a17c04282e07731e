//! Shared handler state.

use super::links::LinkBuilder;
use crate::device::{ports::DeviceRepository, services::DeviceCatalogueService};
use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use mockable::DefaultClock;
use std::sync::Arc;

/// Task service over type-erased stores.
pub type TaskService = TaskLifecycleService<dyn TaskRepository, dyn DeviceRepository, DefaultClock>;

/// Device service over a type-erased store.
pub type DeviceService = DeviceCatalogueService<dyn DeviceRepository>;

/// Dependencies shared by every handler.
///
/// Stores are trait objects so the backend is chosen at startup.
#[derive(Clone)]
pub struct AppState {
    tasks: Arc<TaskService>,
    devices: Arc<DeviceService>,
    links: Arc<LinkBuilder>,
}

impl AppState {
    /// Wires services over the given stores.
    #[must_use]
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        devices: Arc<dyn DeviceRepository>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            tasks: Arc::new(TaskLifecycleService::new(
                tasks,
                Arc::clone(&devices),
                Arc::new(DefaultClock),
            )),
            devices: Arc::new(DeviceCatalogueService::new(devices)),
            links: Arc::new(LinkBuilder::new(base_url)),
        }
    }

    /// Returns the task service.
    #[must_use]
    pub fn tasks(&self) -> &TaskService {
        &self.tasks
    }

    /// Returns the device service.
    #[must_use]
    pub fn devices(&self) -> &DeviceService {
        &self.devices
    }

    /// Returns the link builder.
    #[must_use]
    pub fn links(&self) -> &LinkBuilder {
        &self.links
    }
}
