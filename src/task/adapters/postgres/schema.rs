//! Diesel schema for task persistence.

diesel::table! {
    /// Maintenance tasks. Severity and status are stored as ordinals.
    maintenance_tasks (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Referenced device.
        device_id -> Int8,
        /// Severity rank.
        severity -> Int2,
        /// Status ordinal.
        status -> Int2,
        /// Escaped description.
        description -> Text,
        /// Registration time without zone.
        registered -> Timestamp,
    }
}

