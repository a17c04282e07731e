//! Task severity rating.

use super::ParseTaskSeverityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a maintenance task.
///
/// Variants are declared in ascending rank, so the derived ordering sorts
/// `Unimportant` first and `Critical` last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskSeverity {
    /// Work that can wait.
    Unimportant,
    /// Work that should be scheduled soon.
    Important,
    /// Work that blocks the device.
    Critical,
}

impl TaskSeverity {
    /// Every severity in ascending rank.
    pub const ALL: [Self; 3] = [Self::Unimportant, Self::Important, Self::Critical];

    /// Returns the canonical literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unimportant => "UNIMPORTANT",
            Self::Important => "IMPORTANT",
            Self::Critical => "CRITICAL",
        }
    }

    /// Returns the storage rank; higher is more urgent.
    #[must_use]
    pub const fn rank(self) -> i16 {
        match self {
            Self::Unimportant => 0,
            Self::Important => 1,
            Self::Critical => 2,
        }
    }

    /// Maps a storage rank back to a severity.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskSeverityError`] for ranks outside `0..=2`.
    pub fn from_rank(rank: i16) -> Result<Self, ParseTaskSeverityError> {
        match rank {
            0 => Ok(Self::Unimportant),
            1 => Ok(Self::Important),
            2 => Ok(Self::Critical),
            other => Err(ParseTaskSeverityError(other.to_string())),
        }
    }
}

impl fmt::Display for TaskSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskSeverity {
    type Error = ParseTaskSeverityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == value)
            .ok_or_else(|| ParseTaskSeverityError(value.to_owned()))
    }
}
