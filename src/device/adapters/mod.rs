//! Adapter implementations for device persistence.

pub mod memory;
pub mod postgres;
