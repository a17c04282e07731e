//! Task status.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether maintenance work is still outstanding.
///
/// Any status may change to any other; there is no transition guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work is outstanding.
    Open,
    /// Work is finished.
    Closed,
}

impl TaskStatus {
    /// Every status in storage order.
    pub const ALL: [Self; 2] = [Self::Open, Self::Closed];

    /// Returns the canonical literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    /// Returns the storage ordinal.
    #[must_use]
    pub const fn ordinal(self) -> i16 {
        match self {
            Self::Open => 0,
            Self::Closed => 1,
        }
    }

    /// Maps a storage ordinal back to a status.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskStatusError`] for ordinals other than 0 and 1.
    pub fn from_ordinal(ordinal: i16) -> Result<Self, ParseTaskStatusError> {
        match ordinal {
            0 => Ok(Self::Open),
            1 => Ok(Self::Closed),
            other => Err(ParseTaskStatusError(other.to_string())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "OPEN" => Ok(Self::Open),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
