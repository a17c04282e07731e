//! Maintenance task record, its unsaved form and partial updates.

use super::{TaskDescription, TaskId, TaskSeverity, TaskStatus};
use crate::device::domain::DeviceId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Task that has not been stored yet and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    device_id: DeviceId,
    severity: TaskSeverity,
    status: TaskStatus,
    description: TaskDescription,
    registered: NaiveDateTime,
}

impl NewTask {
    /// Assembles an unsaved task from validated values.
    #[must_use]
    pub const fn new(
        device_id: DeviceId,
        severity: TaskSeverity,
        status: TaskStatus,
        description: TaskDescription,
        registered: NaiveDateTime,
    ) -> Self {
        Self {
            device_id,
            severity,
            status,
            description,
            registered,
        }
    }

    /// Returns the referenced device.
    #[must_use]
    pub const fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> TaskSeverity {
        self.severity
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the escaped description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the registration time.
    #[must_use]
    pub const fn registered(&self) -> NaiveDateTime {
        self.registered
    }

    /// Attaches the identifier the store assigned on insert.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            device_id: self.device_id,
            severity: self.severity,
            status: self.status,
            description: self.description,
            registered: self.registered,
        }
    }
}

/// Stored maintenance task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    device_id: DeviceId,
    severity: TaskSeverity,
    status: TaskStatus,
    description: TaskDescription,
    registered: NaiveDateTime,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted device reference.
    pub device_id: DeviceId,
    /// Persisted severity.
    pub severity: TaskSeverity,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted, already escaped description.
    pub description: TaskDescription,
    /// Persisted registration time.
    pub registered: NaiveDateTime,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            device_id: data.device_id,
            severity: data.severity,
            status: data.status,
            description: data.description,
            registered: data.registered,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the referenced device.
    #[must_use]
    pub const fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> TaskSeverity {
        self.severity
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the escaped description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the registration time.
    #[must_use]
    pub const fn registered(&self) -> NaiveDateTime {
        self.registered
    }

    /// Returns a copy of this task with every field in `patch` applied.
    ///
    /// Fields the patch leaves unset keep their current values. The receiver
    /// is not modified.
    #[must_use]
    pub fn apply(&self, patch: TaskPatch) -> Self {
        Self {
            id: self.id,
            device_id: patch.device_id.unwrap_or(self.device_id),
            severity: patch.severity.unwrap_or(self.severity),
            status: patch.status.unwrap_or(self.status),
            description: patch
                .description
                .unwrap_or_else(|| self.description.clone()),
            registered: patch.registered.unwrap_or(self.registered),
        }
    }
}

/// Validated set of field changes for an existing task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    device_id: Option<DeviceId>,
    severity: Option<TaskSeverity>,
    status: Option<TaskStatus>,
    description: Option<TaskDescription>,
    registered: Option<NaiveDateTime>,
}

impl TaskPatch {
    /// Creates a patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the device reference.
    #[must_use]
    pub const fn with_device_id(mut self, device_id: DeviceId) -> Self {
        self.device_id = Some(device_id);
        self
    }

    /// Sets the severity.
    #[must_use]
    pub const fn with_severity(mut self, severity: TaskSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: TaskDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the registration time.
    #[must_use]
    pub const fn with_registered(mut self, registered: NaiveDateTime) -> Self {
        self.registered = Some(registered);
        self
    }

    /// Returns the device reference the patch sets, if any.
    #[must_use]
    pub const fn device_id(&self) -> Option<DeviceId> {
        self.device_id
    }

    /// Returns `true` when the patch changes no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.device_id.is_none()
            && self.severity.is_none()
            && self.status.is_none()
            && self.description.is_none()
            && self.registered.is_none()
    }
}
