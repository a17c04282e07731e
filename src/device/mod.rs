//! Factory device catalogue.
//!
//! Devices are the equipment that maintenance tasks refer to. They are
//! registered in bulk at seed time and are immutable afterwards; tasks only
//! hold a [`domain::DeviceId`] and look devices up through the
//! [`ports::DeviceRepository`] port.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Catalogue service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
