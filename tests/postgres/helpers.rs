//! Shared test helpers for `PostgreSQL` integration tests.

use chrono::{NaiveDate, NaiveDateTime};
use service_manual::device::{
    adapters::postgres::PostgresDeviceRepository,
    domain::{Device, NewDevice},
    ports::DeviceRepository,
};
use service_manual::storage::{self, PgPool};
use service_manual::task::adapters::postgres::PostgresTaskRepository;
use std::sync::OnceLock;

/// Environment variable naming the test database.
pub const DATABASE_URL_VAR: &str = "SERVICE_MANUAL_TEST_DATABASE_URL";

static POOL: OnceLock<PgPool> = OnceLock::new();

/// Repositories over the shared test pool.
pub struct Stores {
    pub tasks: PostgresTaskRepository,
    pub devices: PostgresDeviceRepository,
}

/// Returns repositories when a test database is configured.
///
/// The schema is applied once per test binary.
pub fn stores() -> Option<Stores> {
    let url = std::env::var(DATABASE_URL_VAR).ok()?;
    let pool = tokio::task::block_in_place(|| {
        POOL.get_or_init(|| {
            let built = storage::build_pool(&url, 4).expect("test database pool");
            storage::ensure_schema(&built).expect("test database schema");
            built
        })
        .clone()
    });
    Some(Stores {
        tasks: PostgresTaskRepository::new(pool.clone()),
        devices: PostgresDeviceRepository::new(pool),
    })
}

/// Stores a device with the given name.
pub async fn device(stores: &Stores, name: &str) -> Device {
    let device = NewDevice::new(name, 2015, "Robot arm").expect("valid device");
    stores.devices.insert(&device).await.expect("device insert")
}

/// Returns 2024-02-`day` at `hour`:30:00.
pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, day)
        .and_then(|date| date.and_hms_opt(hour, 30, 0))
        .expect("valid test timestamp")
}
