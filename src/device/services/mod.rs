//! Application services for the device catalogue.

mod catalogue;

pub use catalogue::{
    DeviceCatalogueService, DeviceServiceError, DeviceServiceResult, RegisterDeviceRequest,
};
