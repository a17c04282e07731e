//! Shared world state for maintenance task BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use service_manual::device::{adapters::memory::InMemoryDeviceRepository, domain::Device};
use service_manual::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskLifecycleService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryDeviceRepository, DefaultClock>;

/// Scenario world for maintenance task behaviour tests.
pub struct TaskMaintenanceWorld {
    pub service: TestTaskService,
    pub devices: Arc<InMemoryDeviceRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub device: Option<Device>,
    pub last_task: Option<Task>,
    pub last_listing: Option<Result<Vec<Task>, TaskServiceError>>,
    pub last_edit: Option<Result<Task, TaskServiceError>>,
}

impl TaskMaintenanceWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let devices = Arc::new(InMemoryDeviceRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let service = TaskLifecycleService::new(
            Arc::clone(&tasks),
            Arc::clone(&devices),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            devices,
            tasks,
            device: None,
            last_task: None,
            last_listing: None,
            last_edit: None,
        }
    }
}

impl Default for TaskMaintenanceWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskMaintenanceWorld {
    TaskMaintenanceWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
