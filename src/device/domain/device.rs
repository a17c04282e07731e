//! Device record and its validated scalar fields.

use super::{DeviceDomainError, DeviceId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty display name of a device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceName(String);

impl DeviceName {
    /// Creates a validated device name.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDomainError::EmptyName`] when the trimmed value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, DeviceDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DeviceDomainError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Four-digit year of manufacture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManufactureYear(i32);

impl ManufactureYear {
    const EARLIEST: i32 = 1000;
    const LATEST: i32 = 9999;

    /// Creates a validated manufacture year.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDomainError::InvalidYear`] when the value does not have
    /// exactly four digits.
    pub const fn new(value: i32) -> Result<Self, DeviceDomainError> {
        if value < Self::EARLIEST || value > Self::LATEST {
            return Err(DeviceDomainError::InvalidYear(value));
        }
        Ok(Self(value))
    }

    /// Returns the year as an integer.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

/// Device that has not been stored yet and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevice {
    name: DeviceName,
    year: ManufactureYear,
    device_type: String,
}

impl NewDevice {
    /// Validates and assembles an unsaved device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDomainError`] when the name, year or type is invalid.
    pub fn new(
        name: impl Into<String>,
        year: i32,
        device_type: impl Into<String>,
    ) -> Result<Self, DeviceDomainError> {
        let raw_type = device_type.into();
        let trimmed_type = raw_type.trim();
        if trimmed_type.is_empty() {
            return Err(DeviceDomainError::EmptyType);
        }
        Ok(Self {
            name: DeviceName::new(name)?,
            year: ManufactureYear::new(year)?,
            device_type: trimmed_type.to_owned(),
        })
    }

    /// Returns the device name.
    #[must_use]
    pub const fn name(&self) -> &DeviceName {
        &self.name
    }

    /// Returns the manufacture year.
    #[must_use]
    pub const fn year(&self) -> ManufactureYear {
        self.year
    }

    /// Returns the free-text type label.
    #[must_use]
    pub fn device_type(&self) -> &str {
        &self.device_type
    }

    /// Attaches the identifier the store assigned on insert.
    #[must_use]
    pub fn into_device(self, id: DeviceId) -> Device {
        Device {
            id,
            name: self.name,
            year: self.year,
            device_type: self.device_type,
        }
    }
}

/// Stored factory device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    id: DeviceId,
    name: DeviceName,
    year: ManufactureYear,
    device_type: String,
}

impl Device {
    /// Returns the device identifier.
    #[must_use]
    pub const fn id(&self) -> DeviceId {
        self.id
    }

    /// Returns the device name.
    #[must_use]
    pub const fn name(&self) -> &DeviceName {
        &self.name
    }

    /// Returns the manufacture year.
    #[must_use]
    pub const fn year(&self) -> ManufactureYear {
        self.year
    }

    /// Returns the free-text type label.
    #[must_use]
    pub fn device_type(&self) -> &str {
        &self.device_type
    }
}
