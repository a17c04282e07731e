//! Service layer for registering and looking up factory devices.

use crate::device::{
    domain::{Device, DeviceDomainError, DeviceId, NewDevice},
    ports::{DeviceRepository, DeviceRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterDeviceRequest {
    name: String,
    year: i32,
    device_type: String,
}

impl RegisterDeviceRequest {
    /// Creates a request with every device field.
    #[must_use]
    pub fn new(name: impl Into<String>, year: i32, device_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            year,
            device_type: device_type.into(),
        }
    }
}

/// Service-level errors for device catalogue operations.
#[derive(Debug, Error)]
pub enum DeviceServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DeviceDomainError),
    /// No device has the requested identifier.
    #[error("could not find factory device {0}")]
    NotFound(DeviceId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] DeviceRepositoryError),
}

/// Result type for device catalogue operations.
pub type DeviceServiceResult<T> = Result<T, DeviceServiceError>;

/// Device registration and lookup service.
#[derive(Clone)]
pub struct DeviceCatalogueService<R>
where
    R: DeviceRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> DeviceCatalogueService<R>
where
    R: DeviceRepository + ?Sized,
{
    /// Creates a new catalogue service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceServiceError::Domain`] for invalid fields and
    /// [`DeviceServiceError::Repository`] when persistence fails.
    pub async fn register_device(&self, request: RegisterDeviceRequest) -> DeviceServiceResult<Device> {
        let RegisterDeviceRequest {
            name,
            year,
            device_type,
        } = request;
        let device = NewDevice::new(name, year, device_type)?;
        let stored = self.repository.insert(&device).await?;
        tracing::debug!(device_id = %stored.id(), "registered factory device");
        Ok(stored)
    }

    /// Returns every device ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceServiceError::Repository`] when the lookup fails.
    pub async fn list_devices(&self) -> DeviceServiceResult<Vec<Device>> {
        Ok(self.repository.find_all().await?)
    }

    /// Fetches one device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceServiceError::NotFound`] when no device has the
    /// identifier.
    pub async fn find_device(&self, id: DeviceId) -> DeviceServiceResult<Device> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DeviceServiceError::NotFound(id))
    }
}
