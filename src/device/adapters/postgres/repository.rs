//! `PostgreSQL` repository implementation for the device catalogue.

use super::{
    models::{DeviceRow, NewDeviceRow},
    schema::devices,
};
use crate::device::{
    domain::{Device, DeviceId, NewDevice},
    ports::{DeviceRepository, DeviceRepositoryError, DeviceRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by device adapters.
pub type DevicePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed device repository.
#[derive(Debug, Clone)]
pub struct PostgresDeviceRepository {
    pool: DevicePgPool,
}

impl PostgresDeviceRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DevicePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DeviceRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DeviceRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DeviceRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DeviceRepositoryError::persistence)?
    }
}

#[async_trait]
impl DeviceRepository for PostgresDeviceRepository {
    async fn insert(&self, device: &NewDevice) -> DeviceRepositoryResult<Device> {
        let new_row = to_new_row(device);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(devices::table)
                .values(&new_row)
                .returning(DeviceRow::as_returning())
                .get_result::<DeviceRow>(connection)
                .map_err(DeviceRepositoryError::persistence)?;
            row_to_device(row)
        })
        .await
    }

    async fn insert_many(&self, new_devices: &[NewDevice]) -> DeviceRepositoryResult<Vec<Device>> {
        let new_rows: Vec<NewDeviceRow> = new_devices.iter().map(to_new_row).collect();
        self.run_blocking(move |connection| {
            let rows = diesel::insert_into(devices::table)
                .values(&new_rows)
                .returning(DeviceRow::as_returning())
                .get_results::<DeviceRow>(connection)
                .map_err(DeviceRepositoryError::persistence)?;
            rows.into_iter().map(row_to_device).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: DeviceId) -> DeviceRepositoryResult<Option<Device>> {
        self.run_blocking(move |connection| {
            let row = devices::table
                .find(id.value())
                .select(DeviceRow::as_select())
                .first::<DeviceRow>(connection)
                .optional()
                .map_err(DeviceRepositoryError::persistence)?;
            row.map(row_to_device).transpose()
        })
        .await
    }

    async fn exists_by_id(&self, id: DeviceId) -> DeviceRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(devices::table.find(id.value())))
                .get_result::<bool>(connection)
                .map_err(DeviceRepositoryError::persistence)
        })
        .await
    }

    async fn find_all(&self) -> DeviceRepositoryResult<Vec<Device>> {
        self.run_blocking(move |connection| {
            let rows = devices::table
                .order(devices::id.asc())
                .select(DeviceRow::as_select())
                .load::<DeviceRow>(connection)
                .map_err(DeviceRepositoryError::persistence)?;
            rows.into_iter().map(row_to_device).collect()
        })
        .await
    }
}

fn to_new_row(device: &NewDevice) -> NewDeviceRow {
    NewDeviceRow {
        name: device.name().as_str().to_owned(),
        year: device.year().value(),
        device_type: device.device_type().to_owned(),
    }
}

fn row_to_device(row: DeviceRow) -> DeviceRepositoryResult<Device> {
    let DeviceRow {
        id,
        name,
        year,
        device_type,
    } = row;
    let device = NewDevice::new(name, year, device_type).map_err(DeviceRepositoryError::persistence)?;
    Ok(device.into_device(DeviceId::new(id)))
}
