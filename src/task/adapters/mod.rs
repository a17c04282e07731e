//! Adapter implementations for task storage.

pub mod memory;
pub mod postgres;
