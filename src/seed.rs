//! Random demonstration data inserted at startup.

use crate::config::SeedConfig;
use crate::device::{
    domain::{Device, DeviceDomainError, NewDevice},
    ports::{DeviceRepository, DeviceRepositoryError},
};
use crate::task::{
    domain::{NewTask, TaskDescription, TaskDomainError, TaskSeverity, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDateTime;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

const DEVICE_NAMES: &[&str] = &[
    "localhostComp",
    "John's device",
    "Old runner",
    "Baker",
    "Charlie",
    "The Tank",
    "Bobby the stimulator",
];

const DEVICE_TYPES: &[&str] = &[
    "Computer",
    "Monitor",
    "Electric vehicle",
    "Gym equipment",
    "Temperature sensor",
    "Refrigerator",
    "Oven",
    "Fan",
];

const TASK_DESCRIPTIONS: &[&str] = &[
    "Fixing CPU cooling mechanism",
    "Cleaning",
    "Bug fixes",
    "Glueing everything back together",
    "General fixes",
    "Casual cleanup",
    "A bad description because the employee was annoyed muahahahahaha >:D",
    "Fix nuclear meltdown",
    "Device was overheating",
    "Replaced a transistor",
];

const EARLIEST_YEAR: i32 = 1975;
const LATEST_YEAR: i32 = 2022;

/// Errors raised while generating or storing seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A generated device failed validation.
    #[error(transparent)]
    Device(#[from] DeviceDomainError),
    /// A generated task failed validation.
    #[error(transparent)]
    Task(#[from] TaskDomainError),
    /// Devices could not be stored.
    #[error(transparent)]
    DeviceRepository(#[from] DeviceRepositoryError),
    /// Tasks could not be stored.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),
}

/// Counts of records inserted by [`seed_store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Devices inserted.
    pub devices: usize,
    /// Tasks inserted.
    pub tasks: usize,
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Generates `count` devices with names and types from fixed lists and a
/// manufacture year between 1975 and 2022.
///
/// # Errors
///
/// Returns [`DeviceDomainError`] if a generated device fails validation.
pub fn random_devices<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<NewDevice>, DeviceDomainError> {
    (0..count)
        .map(|_| {
            let name = pick(rng, DEVICE_NAMES);
            let device_type = pick(rng, DEVICE_TYPES);
            let year = rng.random_range(EARLIEST_YEAR..=LATEST_YEAR);
            NewDevice::new(name, year, device_type)
        })
        .collect()
}

/// Generates `per_device` tasks for every device, all registered at
/// `registered`.
///
/// # Errors
///
/// Returns [`TaskDomainError`] if a generated description fails validation.
pub fn random_tasks<R: Rng + ?Sized>(
    rng: &mut R,
    devices: &[Device],
    per_device: usize,
    registered: NaiveDateTime,
) -> Result<Vec<NewTask>, TaskDomainError> {
    let mut tasks = Vec::with_capacity(devices.len().saturating_mul(per_device));
    for device in devices {
        for _ in 0..per_device {
            let description = TaskDescription::new(pick(rng, TASK_DESCRIPTIONS))?;
            let severity = TaskSeverity::ALL
                .choose(rng)
                .copied()
                .unwrap_or(TaskSeverity::Unimportant);
            let status = TaskStatus::ALL
                .choose(rng)
                .copied()
                .unwrap_or(TaskStatus::Open);
            tasks.push(NewTask::new(
                device.id(),
                severity,
                status,
                description,
                registered,
            ));
        }
    }
    Ok(tasks)
}

/// Inserts random devices and their tasks.
///
/// # Errors
///
/// Returns [`SeedError`] when generation or persistence fails.
pub async fn seed_store<D, T, R>(
    devices: &D,
    tasks: &T,
    config: SeedConfig,
    rng: &mut R,
    registered: NaiveDateTime,
) -> Result<SeedSummary, SeedError>
where
    D: DeviceRepository + ?Sized,
    T: TaskRepository + ?Sized,
    R: Rng + ?Sized,
{
    if config.is_disabled() {
        return Ok(SeedSummary {
            devices: 0,
            tasks: 0,
        });
    }
    let new_devices = random_devices(rng, config.devices)?;
    let stored_devices = devices.insert_many(&new_devices).await?;
    let new_tasks = random_tasks(rng, &stored_devices, config.tasks_per_device, registered)?;
    let stored_tasks = tasks.insert_many(&new_tasks).await?;
    let summary = SeedSummary {
        devices: stored_devices.len(),
        tasks: stored_tasks.len(),
    };
    tracing::info!(
        devices = summary.devices,
        tasks = summary.tasks,
        "seeded demonstration data"
    );
    Ok(summary)
}
