//! Diesel row models for device persistence.

use super::schema::devices;
use diesel::prelude::*;

/// Query result row for device records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = devices)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeviceRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Manufacture year.
    pub year: i32,
    /// Type label.
    pub device_type: String,
}

/// Insert model for device records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = devices)]
pub struct NewDeviceRow {
    /// Display name.
    pub name: String,
    /// Manufacture year.
    pub year: i32,
    /// Type label.
    pub device_type: String,
}
