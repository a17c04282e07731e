//! String-keyed request parameters and their conversion into task fields.

use super::TaskInputError;
use crate::device::domain::DeviceId;
use crate::task::domain::{TaskDescription, TaskSeverity, TaskStatus, parse_registration_time};
use chrono::NaiveDateTime;
use std::fmt;

/// Names accepted by the task filter, in display order.
pub const FILTER_PARAMETERS: &str = "deviceId, status, severity";

/// Names accepted in task creation and edit bodies, in display order.
pub const BODY_PROPERTIES: &str = "deviceId, status, severity, description, registered";

/// Ordered name/value pairs taken from a query string or request body.
///
/// Entries keep their input order. A value of `None` stands for an explicit
/// null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParameters(Vec<(String, Option<String>)>);

impl RawParameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a name with a present value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((name.into(), Some(value.into())));
        self
    }

    /// Appends a name whose value is null.
    #[must_use]
    pub fn with_null(mut self, name: impl Into<String>) -> Self {
        self.0.push((name.into(), None));
        self
    }

    /// Returns `true` when no parameter was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of supplied entries, repeats included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates entries in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}

impl FromIterator<(String, String)> for RawParameters {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name, Some(value)))
                .collect(),
        )
    }
}

impl FromIterator<(String, Option<String>)> for RawParameters {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Task field addressable by name in filters and bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// `deviceId`
    DeviceId,
    /// `status`
    Status,
    /// `severity`
    Severity,
    /// `description`
    Description,
    /// `registered`
    Registered,
}

impl TaskField {
    /// Looks up a field by its exact wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "deviceId" => Some(Self::DeviceId),
            "status" => Some(Self::Status),
            "severity" => Some(Self::Severity),
            "description" => Some(Self::Description),
            "registered" => Some(Self::Registered),
            _ => None,
        }
    }

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeviceId => "deviceId",
            Self::Status => "status",
            Self::Severity => "severity",
            Self::Description => "description",
            Self::Registered => "registered",
        }
    }

    /// Describes the values the field accepts.
    #[must_use]
    pub const fn expectation(self) -> &'static str {
        match self {
            Self::DeviceId => "an integer",
            Self::Status => "either 'OPEN' or 'CLOSED'",
            Self::Severity => "'UNIMPORTANT', 'IMPORTANT', or 'CRITICAL'",
            Self::Description => "a non-empty string",
            Self::Registered => "a local date-time formatted as yyyy-MM-ddTHH:mm:ss",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn unconvertible(field: TaskField, value: Option<&str>) -> TaskInputError {
    TaskInputError::UnconvertibleValue {
        field,
        value: value.map(str::to_owned),
    }
}

pub(super) fn parse_device_id(value: Option<&str>) -> Result<DeviceId, TaskInputError> {
    value
        .and_then(|raw| raw.parse::<DeviceId>().ok())
        .ok_or_else(|| unconvertible(TaskField::DeviceId, value))
}

pub(super) fn parse_status(value: Option<&str>) -> Result<TaskStatus, TaskInputError> {
    value
        .and_then(|raw| TaskStatus::try_from(raw).ok())
        .ok_or_else(|| unconvertible(TaskField::Status, value))
}

pub(super) fn parse_severity(value: Option<&str>) -> Result<TaskSeverity, TaskInputError> {
    value
        .and_then(|raw| TaskSeverity::try_from(raw).ok())
        .ok_or_else(|| unconvertible(TaskField::Severity, value))
}

pub(super) fn parse_description(value: Option<&str>) -> Result<TaskDescription, TaskInputError> {
    TaskDescription::new(value.unwrap_or_default()).map_err(|_| TaskInputError::EmptyDescription)
}

pub(super) fn parse_registered(value: Option<&str>) -> Result<NaiveDateTime, TaskInputError> {
    value
        .and_then(|raw| parse_registration_time(raw).ok())
        .ok_or_else(|| unconvertible(TaskField::Registered, value))
}
