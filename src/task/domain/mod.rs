//! Domain model for maintenance tasks.
//!
//! A task records one piece of maintenance work on a factory device. It keeps
//! the device as a plain [`DeviceId`](crate::device::domain::DeviceId) value
//! and never holds the device record itself.

mod description;
mod error;
mod ids;
mod registration;
mod severity;
mod status;
mod task;

pub use description::TaskDescription;
pub use error::{
    ParseRegistrationTimeError, ParseTaskSeverityError, ParseTaskStatusError, TaskDomainError,
};
pub use ids::TaskId;
pub use registration::{REGISTRATION_TIME_FORMAT, parse_registration_time};
pub use severity::TaskSeverity;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskPatch};
