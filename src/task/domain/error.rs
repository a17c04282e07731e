//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The description is empty.
    #[error("description can't be null or empty")]
    EmptyDescription,
}

/// Error returned while parsing a task severity literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task severity: {0}")]
pub struct ParseTaskSeverityError(pub String);

/// Error returned while parsing a task status literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a registration timestamp.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error(
    "could not parse registration time '{0}': expected {format}",
    format = super::REGISTRATION_TIME_FORMAT
)]
pub struct ParseRegistrationTimeError(pub String);
