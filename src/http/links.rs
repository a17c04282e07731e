//! HAL link construction.

use crate::device::domain::DeviceId;
use crate::task::domain::TaskId;
use serde::Serialize;

/// One HAL link object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Target URL.
    pub href: String,
}

/// Builds resource links under a public base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkBuilder {
    base_url: String,
}

impl LinkBuilder {
    /// Creates a builder; `base_url` should not end with a slash.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn href(&self, path: &str) -> Link {
        Link {
            href: format!("{}{path}", self.base_url),
        }
    }

    /// Link to one task.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Link {
        self.href(&format!("/api/tasks/{id}"))
    }

    /// Link to the unfiltered task collection.
    #[must_use]
    pub fn tasks(&self) -> Link {
        self.href("/api/tasks")
    }

    /// Link to the tasks of one device.
    #[must_use]
    pub fn device_tasks(&self, device_id: DeviceId) -> Link {
        self.href(&format!("/api/tasks?deviceId={device_id}"))
    }

    /// Link to one device.
    #[must_use]
    pub fn device(&self, id: DeviceId) -> Link {
        self.href(&format!("/api/factorydevices/{id}"))
    }

    /// Link to the device collection.
    #[must_use]
    pub fn devices(&self) -> Link {
        self.href("/api/factorydevices")
    }
}
