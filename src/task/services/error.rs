//! Error types for task input validation and task service operations.

use super::TaskField;
use crate::device::domain::DeviceId;
use crate::device::ports::DeviceRepositoryError;
use crate::task::domain::TaskId;
use crate::task::ports::TaskRepositoryError;
use thiserror::Error;

/// Caller input that cannot be turned into a task filter or task change.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskInputError {
    /// A name outside the accepted set was supplied.
    #[error("unknown parameter '{name}', available: {accepted}")]
    UnknownParameter {
        /// Offending name.
        name: String,
        /// Comma-separated accepted names.
        accepted: &'static str,
    },

    /// A value could not be converted to the field's type.
    #[error(
        "{field} must be {expectation}, got {shown}",
        expectation = .field.expectation(),
        shown = show_value(.value.as_deref())
    )]
    UnconvertibleValue {
        /// Field the value was supplied for.
        field: TaskField,
        /// Supplied value, `None` for null.
        value: Option<String>,
    },

    /// The description was null or empty.
    #[error("description can't be null or empty")]
    EmptyDescription,

    /// An edit was requested without any property.
    #[error("empty request body")]
    EmptyBody,

    /// A property required to create a task was not supplied.
    #[error("missing required property '{0}'")]
    MissingProperty(TaskField),
}

fn show_value(value: Option<&str>) -> String {
    value.map_or_else(|| "null".to_owned(), |raw| format!("'{raw}'"))
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Caller input was rejected.
    #[error(transparent)]
    Input(#[from] TaskInputError),

    /// The referenced device does not exist.
    #[error("could not find factory device {0}")]
    DeviceNotFound(DeviceId),

    /// The task does not exist.
    #[error("could not find maintenance task {0}")]
    TaskNotFound(TaskId),

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),

    /// Device repository operation failed.
    #[error(transparent)]
    DeviceRepository(#[from] DeviceRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::TaskNotFound(id),
            TaskRepositoryError::UnknownDevice(id) => Self::DeviceNotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
