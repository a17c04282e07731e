//! Application services for task filtering, editing and lifecycle.

mod editor;
mod error;
mod lifecycle;
mod parameters;
mod query;

pub use editor::TaskEditor;
pub use error::{TaskInputError, TaskServiceError, TaskServiceResult};
pub use lifecycle::TaskLifecycleService;
pub use parameters::{BODY_PROPERTIES, FILTER_PARAMETERS, RawParameters, TaskField};
pub use query::{ResolvedTasks, TaskFilter, TaskQueryResolver};
