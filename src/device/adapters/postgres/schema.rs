//! Diesel schema for device persistence.

diesel::table! {
    /// Factory devices tracked for maintenance.
    devices (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Four-digit manufacture year.
        year -> Int4,
        /// Free-text type label.
        #[max_length = 255]
        device_type -> Varchar,
    }
}
