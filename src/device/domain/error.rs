//! Error types for device domain validation.

use thiserror::Error;

/// Errors returned while constructing device values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeviceDomainError {
    /// The device name is empty after trimming.
    #[error("device name must not be empty")]
    EmptyName,

    /// The device type label is empty after trimming.
    #[error("device type must not be empty")]
    EmptyType,

    /// The manufacture year is not a four-digit year.
    #[error("invalid manufacture year {0}, expected a four-digit year")]
    InvalidYear(i32),
}
