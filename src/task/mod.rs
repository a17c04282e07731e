//! Maintenance tasks recorded against factory devices.
//!
//! Tasks are listed through a filter resolver that maps `deviceId`, `status`
//! and `severity` parameters onto one enumerated repository lookup, and
//! changed through an editor that validates every property before saving.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
