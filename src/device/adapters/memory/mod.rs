//! In-memory device adapter.

mod device;

pub use device::InMemoryDeviceRepository;
