//! Task creation, lookup, deletion and editing by identifier.

use super::parameters::{self, BODY_PROPERTIES};
use super::{
    RawParameters, ResolvedTasks, TaskEditor, TaskField, TaskInputError, TaskQueryResolver,
    TaskServiceError, TaskServiceResult,
};
use crate::device::{domain::DeviceId, ports::DeviceRepository};
use crate::task::{
    domain::{NewTask, Task, TaskDescription, TaskId, TaskSeverity, TaskStatus},
    ports::TaskRepository,
};
use chrono::NaiveDateTime;
use mockable::Clock;
use std::sync::Arc;

/// Task orchestration service combining the resolver and the editor.
#[derive(Clone)]
pub struct TaskLifecycleService<T, D, C>
where
    T: TaskRepository + ?Sized,
    D: DeviceRepository + ?Sized,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    devices: Arc<D>,
    clock: Arc<C>,
    resolver: TaskQueryResolver<T>,
    editor: TaskEditor<T, D>,
}

#[derive(Default)]
struct CreateTaskFields {
    device_id: Option<DeviceId>,
    status: Option<TaskStatus>,
    severity: Option<TaskSeverity>,
    description: Option<TaskDescription>,
    registered: Option<NaiveDateTime>,
}

impl<T, D, C> TaskLifecycleService<T, D, C>
where
    T: TaskRepository + ?Sized,
    D: DeviceRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub fn new(tasks: Arc<T>, devices: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            resolver: TaskQueryResolver::new(Arc::clone(&tasks)),
            editor: TaskEditor::new(Arc::clone(&tasks), Arc::clone(&devices)),
            tasks,
            devices,
            clock,
        }
    }

    /// Lists tasks matching filter parameters.
    ///
    /// # Errors
    ///
    /// See [`TaskQueryResolver::resolve_filter`].
    pub async fn list_tasks(&self, params: &RawParameters) -> TaskServiceResult<ResolvedTasks> {
        self.resolver.resolve_filter(params).await
    }

    /// Creates a task from body properties.
    ///
    /// `deviceId`, `status`, `severity` and `description` are required.
    /// `registered` is optional; when absent or unparsable the current time is
    /// used instead.
    ///
    /// # Errors
    ///
    /// Returns [`TaskInputError`] for unknown, missing or invalid properties,
    /// [`TaskServiceError::DeviceNotFound`] when the device does not exist and
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create_task(&self, body: &RawParameters) -> TaskServiceResult<Task> {
        let fields = read_create_fields(body)?;
        let device_id = fields
            .device_id
            .ok_or(TaskInputError::MissingProperty(TaskField::DeviceId))?;
        let status = fields
            .status
            .ok_or(TaskInputError::MissingProperty(TaskField::Status))?;
        let severity = fields
            .severity
            .ok_or(TaskInputError::MissingProperty(TaskField::Severity))?;
        let description = fields
            .description
            .ok_or(TaskInputError::MissingProperty(TaskField::Description))?;
        let registered = fields
            .registered
            .unwrap_or_else(|| self.clock.utc().naive_utc());

        if !self.devices.exists_by_id(device_id).await? {
            return Err(TaskServiceError::DeviceNotFound(device_id));
        }
        let new_task = NewTask::new(device_id, severity, status, description, registered);
        let stored = self.tasks.insert(&new_task).await?;
        tracing::info!(task_id = %stored.id(), device_id = %device_id, "created task");
        Ok(stored)
    }

    /// Fetches one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no task has the
    /// identifier.
    pub async fn find_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))
    }

    /// Deletes one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no task has the
    /// identifier.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        if !self.tasks.delete_by_id(id).await? {
            return Err(TaskServiceError::TaskNotFound(id));
        }
        tracing::info!(task_id = %id, "deleted task");
        Ok(())
    }

    /// Deletes every task matching filter parameters and returns the count.
    ///
    /// # Errors
    ///
    /// See [`TaskQueryResolver::resolve_filter`].
    pub async fn delete_matching(&self, params: &RawParameters) -> TaskServiceResult<usize> {
        let resolved = self.resolver.resolve_filter(params).await?;
        let ids: Vec<TaskId> = resolved.tasks.iter().map(Task::id).collect();
        let removed = self.tasks.delete_many(&ids).await?;
        tracing::info!(removed, "deleted matching tasks");
        Ok(removed)
    }

    /// Applies body properties to the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when no task has the
    /// identifier, otherwise see [`TaskEditor::edit_task`].
    pub async fn edit_task(&self, id: TaskId, body: &RawParameters) -> TaskServiceResult<Task> {
        let task = self.find_task(id).await?;
        self.editor.edit_task(&task, body).await
    }
}

fn read_create_fields(body: &RawParameters) -> Result<CreateTaskFields, TaskInputError> {
    let mut fields = CreateTaskFields::default();
    for (name, value) in body.iter() {
        match TaskField::from_name(name) {
            Some(TaskField::DeviceId) => {
                fields.device_id = Some(parameters::parse_device_id(value)?);
            }
            Some(TaskField::Status) => fields.status = Some(parameters::parse_status(value)?),
            Some(TaskField::Severity) => {
                fields.severity = Some(parameters::parse_severity(value)?);
            }
            Some(TaskField::Description) => {
                fields.description = Some(parameters::parse_description(value)?);
            }
            Some(TaskField::Registered) => match parameters::parse_registered(value) {
                Ok(registered) => fields.registered = Some(registered),
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring registration time, using now");
                    fields.registered = None;
                }
            },
            None => {
                return Err(TaskInputError::UnknownParameter {
                    name: name.to_owned(),
                    accepted: BODY_PROPERTIES,
                });
            }
        }
    }
    Ok(fields)
}
