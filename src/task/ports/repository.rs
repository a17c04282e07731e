//! Repository port for task persistence and the enumerated filter lookups.
//!
//! Every listing operation returns tasks ordered by severity rank ascending,
//! then registration time ascending, then identifier ascending.

use crate::device::domain::DeviceId;
use crate::task::domain::{NewTask, Task, TaskId, TaskSeverity, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task in listing order.
    async fn find_all_ordered(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks of one device.
    async fn find_by_device(&self, device_id: DeviceId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks with the given status.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks with the given severity.
    async fn find_by_severity(&self, severity: TaskSeverity) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks of one device with the given status.
    async fn find_by_device_and_status(
        &self,
        device_id: DeviceId,
        status: TaskStatus,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks of one device with the given severity.
    async fn find_by_device_and_severity(
        &self,
        device_id: DeviceId,
        severity: TaskSeverity,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks with the given status and severity.
    async fn find_by_status_and_severity(
        &self,
        status: TaskStatus,
        severity: TaskSeverity,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks of one device with the given status and severity.
    async fn find_by_device_and_status_and_severity(
        &self,
        device_id: DeviceId,
        status: TaskStatus,
        severity: TaskSeverity,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Reports whether a task with the identifier exists.
    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Deletes a task by identifier.
    ///
    /// Returns `false` when no task was removed.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Deletes every listed task and returns how many rows were removed.
    ///
    /// Identifiers that do not exist are skipped.
    async fn delete_many(&self, ids: &[TaskId]) -> TaskRepositoryResult<usize>;

    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::UnknownDevice`] when the store enforces
    /// the device reference and it does not resolve.
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Stores several new tasks in one call, preserving input order.
    async fn insert_many(&self, tasks: &[NewTask]) -> TaskRepositoryResult<Vec<Task>>;

    /// Overwrites every field of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The referenced device does not exist.
    #[error("unknown device: {0}")]
    UnknownDevice(DeviceId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
