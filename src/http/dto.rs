//! Response models and request body conversion.

use super::links::{Link, LinkBuilder};
use crate::device::domain::Device;
use crate::task::{
    domain::{Task, TaskSeverity, TaskStatus},
    services::{RawParameters, ResolvedTasks},
};
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

/// Links attached to a task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskLinks {
    /// The task itself.
    #[serde(rename = "self")]
    pub self_link: Link,
    /// All tasks.
    pub tasks: Link,
    /// Tasks of the same device.
    pub device: Link,
}

/// JSON representation of a task.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskModel {
    /// Task identifier.
    pub id: i64,
    /// Referenced device.
    pub device_id: i64,
    /// Severity literal.
    pub severity: TaskSeverity,
    /// Status literal.
    pub status: TaskStatus,
    /// Escaped description.
    pub description: String,
    /// Registration time.
    pub registered: NaiveDateTime,
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: TaskLinks,
}

impl TaskModel {
    /// Builds the representation of `task`.
    #[must_use]
    pub fn from_task(task: &Task, links: &LinkBuilder) -> Self {
        Self {
            id: task.id().value(),
            device_id: task.device_id().value(),
            severity: task.severity(),
            status: task.status(),
            description: task.description().as_str().to_owned(),
            registered: task.registered(),
            links: TaskLinks {
                self_link: links.task(task.id()),
                tasks: links.tasks(),
                device: links.device_tasks(task.device_id()),
            },
        }
    }
}

/// Embedded tasks of a collection.
#[derive(Debug, Clone, Serialize)]
pub struct TaskList {
    /// Tasks in listing order.
    pub tasks: Vec<TaskModel>,
}

/// Links attached to a task collection.
#[derive(Debug, Clone, Serialize)]
pub struct TaskCollectionLinks {
    /// All tasks.
    #[serde(rename = "self")]
    pub self_link: Link,
    /// Tasks of the filtered device, when the filter named one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Link>,
}

/// JSON representation of a filtered task listing.
#[derive(Debug, Clone, Serialize)]
pub struct TaskCollectionModel {
    /// Embedded tasks.
    #[serde(rename = "_embedded")]
    pub embedded: TaskList,
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: TaskCollectionLinks,
}

impl TaskCollectionModel {
    /// Builds the representation of a resolved listing.
    #[must_use]
    pub fn from_resolved(resolved: &ResolvedTasks, links: &LinkBuilder) -> Self {
        Self {
            embedded: TaskList {
                tasks: resolved
                    .tasks
                    .iter()
                    .map(|task| TaskModel::from_task(task, links))
                    .collect(),
            },
            links: TaskCollectionLinks {
                self_link: links.tasks(),
                device: resolved.device_id.map(|id| links.device_tasks(id)),
            },
        }
    }
}

/// Links attached to a device.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceLinks {
    /// The device itself.
    #[serde(rename = "self")]
    pub self_link: Link,
    /// All devices.
    pub devices: Link,
    /// Tasks of the device.
    pub tasks: Link,
}

/// JSON representation of a device.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceModel {
    /// Device identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Manufacture year.
    pub year: i32,
    /// Type label.
    #[serde(rename = "type")]
    pub device_type: String,
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: DeviceLinks,
}

impl DeviceModel {
    /// Builds the representation of `device`.
    #[must_use]
    pub fn from_device(device: &Device, links: &LinkBuilder) -> Self {
        Self {
            id: device.id().value(),
            name: device.name().as_str().to_owned(),
            year: device.year().value(),
            device_type: device.device_type().to_owned(),
            links: DeviceLinks {
                self_link: links.device(device.id()),
                devices: links.devices(),
                tasks: links.device_tasks(device.id()),
            },
        }
    }
}

/// Embedded devices of a collection.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceList {
    /// Devices ordered by identifier.
    pub devices: Vec<DeviceModel>,
}

/// Links attached to the device collection.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceCollectionLinks {
    /// All devices.
    #[serde(rename = "self")]
    pub self_link: Link,
}

/// JSON representation of the device listing.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceCollectionModel {
    /// Embedded devices.
    #[serde(rename = "_embedded")]
    pub embedded: DeviceList,
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: DeviceCollectionLinks,
}

impl DeviceCollectionModel {
    /// Builds the representation of a device listing.
    #[must_use]
    pub fn from_devices(devices: &[Device], links: &LinkBuilder) -> Self {
        Self {
            embedded: DeviceList {
                devices: devices
                    .iter()
                    .map(|device| DeviceModel::from_device(device, links))
                    .collect(),
            },
            links: DeviceCollectionLinks {
                self_link: links.devices(),
            },
        }
    }
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeletionModel {
    /// Number of removed tasks.
    pub deleted: usize,
}

/// Liveness probe response.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthModel {
    /// Always `ok`.
    pub status: &'static str,
}

/// Converts a JSON object into body parameters, keeping key order.
///
/// Strings are taken as-is, `null` becomes an absent value and any other
/// value is replaced by its JSON text.
#[must_use]
pub fn body_parameters(body: Map<String, Value>) -> RawParameters {
    body.into_iter()
        .map(|(name, value)| {
            let text = match value {
                Value::Null => None,
                Value::String(text) => Some(text),
                other => Some(other.to_string()),
            };
            (name, text)
        })
        .collect()
}
