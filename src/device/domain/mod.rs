//! Domain model for factory devices.

mod device;
mod error;
mod ids;

pub use device::{Device, DeviceName, ManufactureYear, NewDevice};
pub use error::DeviceDomainError;
pub use ids::DeviceId;
