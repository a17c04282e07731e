//! Diesel row models for task persistence.

use super::schema::maintenance_tasks;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = maintenance_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Referenced device.
    pub device_id: i64,
    /// Severity rank.
    pub severity: i16,
    /// Status ordinal.
    pub status: i16,
    /// Escaped description.
    pub description: String,
    /// Registration time.
    pub registered: NaiveDateTime,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = maintenance_tasks)]
pub struct NewTaskRow {
    /// Referenced device.
    pub device_id: i64,
    /// Severity rank.
    pub severity: i16,
    /// Status ordinal.
    pub status: i16,
    /// Escaped description.
    pub description: String,
    /// Registration time.
    pub registered: NaiveDateTime,
}

/// Full-row update applied when an existing task is saved.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = maintenance_tasks)]
pub struct TaskChangeset {
    /// Referenced device.
    pub device_id: i64,
    /// Severity rank.
    pub severity: i16,
    /// Status ordinal.
    pub status: i16,
    /// Escaped description.
    pub description: String,
    /// Registration time.
    pub registered: NaiveDateTime,
}
