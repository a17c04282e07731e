//! `PostgreSQL` adapters for device persistence.

mod models;
mod repository;
mod schema;

pub use repository::{DevicePgPool, PostgresDeviceRepository};
