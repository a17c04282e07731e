//! Port contracts for the device catalogue.

pub mod repository;

pub use repository::{DeviceRepository, DeviceRepositoryError, DeviceRepositoryResult};
