//! Partial updates of stored tasks from string-valued properties.

use super::parameters::{self, BODY_PROPERTIES};
use super::{RawParameters, TaskField, TaskInputError, TaskServiceError, TaskServiceResult};
use crate::device::ports::DeviceRepository;
use crate::task::{
    domain::{Task, TaskPatch},
    ports::TaskRepository,
};
use std::sync::Arc;

/// Validates body properties against a task and persists the result.
///
/// Every property is validated before the task is touched, so a rejected
/// edit leaves both the stored task and the caller's copy unchanged.
#[derive(Clone)]
pub struct TaskEditor<T, D>
where
    T: TaskRepository + ?Sized,
    D: DeviceRepository + ?Sized,
{
    tasks: Arc<T>,
    devices: Arc<D>,
}

impl<T, D> TaskEditor<T, D>
where
    T: TaskRepository + ?Sized,
    D: DeviceRepository + ?Sized,
{
    /// Creates an editor over the task and device stores.
    #[must_use]
    pub const fn new(tasks: Arc<T>, devices: Arc<D>) -> Self {
        Self { tasks, devices }
    }

    /// Applies `body` to `task`, saves it once and returns the stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskInputError::EmptyBody`] for an empty body, the first
    /// [`TaskInputError`] raised while validating properties in input order,
    /// [`TaskServiceError::DeviceNotFound`] when a new `deviceId` does not
    /// resolve, and [`TaskServiceError::Repository`] when saving fails.
    pub async fn edit_task(&self, task: &Task, body: &RawParameters) -> TaskServiceResult<Task> {
        if body.is_empty() {
            return Err(TaskInputError::EmptyBody.into());
        }
        let patch = self.validate(body).await?;
        let edited = task.apply(patch);
        let saved = self.tasks.save(&edited).await?;
        tracing::debug!(task_id = %saved.id(), properties = body.len(), "edited task");
        Ok(saved)
    }

    async fn validate(&self, body: &RawParameters) -> TaskServiceResult<TaskPatch> {
        let mut patch = TaskPatch::new();
        for (name, value) in body.iter() {
            patch = match TaskField::from_name(name) {
                Some(TaskField::DeviceId) => {
                    let device_id = parameters::parse_device_id(value)?;
                    if !self.devices.exists_by_id(device_id).await? {
                        return Err(TaskServiceError::DeviceNotFound(device_id));
                    }
                    patch.with_device_id(device_id)
                }
                Some(TaskField::Status) => patch.with_status(parameters::parse_status(value)?),
                Some(TaskField::Severity) => {
                    patch.with_severity(parameters::parse_severity(value)?)
                }
                Some(TaskField::Description) => {
                    patch.with_description(parameters::parse_description(value)?)
                }
                Some(TaskField::Registered) => {
                    patch.with_registered(parameters::parse_registered(value)?)
                }
                None => {
                    return Err(TaskInputError::UnknownParameter {
                        name: name.to_owned(),
                        accepted: BODY_PROPERTIES,
                    }
                    .into());
                }
            };
        }
        Ok(patch)
    }
}
