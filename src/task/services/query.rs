//! Resolution of string-valued filter parameters into task lookups.

use super::parameters::{self, FILTER_PARAMETERS};
use super::{RawParameters, TaskField, TaskInputError, TaskServiceResult};
use crate::device::domain::DeviceId;
use crate::task::{
    domain::{Task, TaskSeverity, TaskStatus},
    ports::TaskRepository,
};
use std::sync::Arc;

/// Typed task filter; each present criterion must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    device_id: Option<DeviceId>,
    status: Option<TaskStatus>,
    severity: Option<TaskSeverity>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to one device.
    #[must_use]
    pub const fn with_device_id(mut self, device_id: DeviceId) -> Self {
        self.device_id = Some(device_id);
        self
    }

    /// Restricts the filter to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the filter to one severity.
    #[must_use]
    pub const fn with_severity(mut self, severity: TaskSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Parses filter parameters in input order.
    ///
    /// The first unknown name or unconvertible value stops parsing. A repeated
    /// name overrides the earlier value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskInputError::UnknownParameter`] for names other than
    /// `deviceId`, `status` and `severity`, and
    /// [`TaskInputError::UnconvertibleValue`] for values that do not parse.
    pub fn parse(params: &RawParameters) -> Result<Self, TaskInputError> {
        let mut filter = Self::new();
        for (name, value) in params.iter() {
            match TaskField::from_name(name) {
                Some(TaskField::DeviceId) => {
                    filter.device_id = Some(parameters::parse_device_id(value)?);
                }
                Some(TaskField::Status) => {
                    filter.status = Some(parameters::parse_status(value)?);
                }
                Some(TaskField::Severity) => {
                    filter.severity = Some(parameters::parse_severity(value)?);
                }
                Some(TaskField::Description | TaskField::Registered) | None => {
                    return Err(TaskInputError::UnknownParameter {
                        name: name.to_owned(),
                        accepted: FILTER_PARAMETERS,
                    });
                }
            }
        }
        Ok(filter)
    }

    /// Returns the device criterion, if any.
    #[must_use]
    pub const fn device_id(&self) -> Option<DeviceId> {
        self.device_id
    }

    /// Returns the status criterion, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the severity criterion, if any.
    #[must_use]
    pub const fn severity(&self) -> Option<TaskSeverity> {
        self.severity
    }
}

/// Tasks matching a filter, with the device criterion that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTasks {
    /// Matching tasks in listing order.
    pub tasks: Vec<Task>,
    /// Device criterion of the filter, if one was given.
    pub device_id: Option<DeviceId>,
}

/// Maps task filters onto the enumerated repository lookups.
#[derive(Clone)]
pub struct TaskQueryResolver<R>
where
    R: TaskRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> TaskQueryResolver<R>
where
    R: TaskRepository + ?Sized,
{
    /// Creates a resolver over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Parses filter parameters and returns the matching tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Input`](super::TaskServiceError::Input)
    /// when a parameter is rejected and
    /// [`TaskServiceError::Repository`](super::TaskServiceError::Repository)
    /// when the lookup fails.
    pub async fn resolve_filter(&self, params: &RawParameters) -> TaskServiceResult<ResolvedTasks> {
        if params.is_empty() {
            let tasks = self.repository.find_all_ordered().await?;
            return Ok(ResolvedTasks {
                tasks,
                device_id: None,
            });
        }
        let filter = TaskFilter::parse(params)?;
        let tasks = self.find_matching(filter).await?;
        Ok(ResolvedTasks {
            tasks,
            device_id: filter.device_id(),
        })
    }

    /// Runs the one repository lookup that corresponds to the filter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`](super::TaskServiceError::Repository)
    /// when the lookup fails.
    pub async fn find_matching(&self, filter: TaskFilter) -> TaskServiceResult<Vec<Task>> {
        let repository = &self.repository;
        let tasks = match (filter.device_id, filter.status, filter.severity) {
            (None, None, None) => repository.find_all_ordered().await?,
            (Some(device_id), None, None) => repository.find_by_device(device_id).await?,
            (None, Some(status), None) => repository.find_by_status(status).await?,
            (None, None, Some(severity)) => repository.find_by_severity(severity).await?,
            (Some(device_id), Some(status), None) => {
                repository.find_by_device_and_status(device_id, status).await?
            }
            (Some(device_id), None, Some(severity)) => {
                repository
                    .find_by_device_and_severity(device_id, severity)
                    .await?
            }
            (None, Some(status), Some(severity)) => {
                repository
                    .find_by_status_and_severity(status, severity)
                    .await?
            }
            (Some(device_id), Some(status), Some(severity)) => {
                repository
                    .find_by_device_and_status_and_severity(device_id, status, severity)
                    .await?
            }
        };
        tracing::debug!(?filter, matched = tasks.len(), "resolved task filter");
        Ok(tasks)
    }
}
