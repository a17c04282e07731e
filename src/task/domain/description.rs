//! HTML-escaped task description.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty description with `<` and `>` replaced by HTML entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Validates and escapes a raw description.
    ///
    /// Only angle brackets are rewritten; other characters, including `&`,
    /// are stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] for an empty value.
    pub fn new(raw: &str) -> Result<Self, TaskDomainError> {
        if raw.is_empty() {
            return Err(TaskDomainError::EmptyDescription);
        }
        Ok(Self(raw.replace('<', "&lt;").replace('>', "&gt;")))
    }

    /// Wraps a description read back from storage without escaping it again.
    #[must_use]
    pub const fn from_persisted(escaped: String) -> Self {
        Self(escaped)
    }

    /// Returns the escaped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
