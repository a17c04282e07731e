//! Service manual: maintenance tasks for factory devices.
//!
//! The crate keeps a catalogue of factory devices and the maintenance tasks
//! registered against them, and exposes both over a JSON HTTP API.
//!
//! # Architecture
//!
//! The code follows hexagonal architecture principles:
//!
//! - **Domain**: validated value types with no infrastructure dependencies
//! - **Ports**: async repository traits
//! - **Adapters**: in-memory and `PostgreSQL` implementations of the ports
//! - **Services**: query resolution, field editing and lifecycle operations
//!
//! # Modules
//!
//! - [`device`]: factory device catalogue
//! - [`task`]: maintenance task filtering, editing and lifecycle
//! - [`http`]: axum router and handlers
//! - [`config`]: layered service configuration
//! - [`seed`]: random demonstration data
//! - [`storage`]: `PostgreSQL` pool and schema bootstrap

pub mod config;
pub mod device;
pub mod http;
pub mod seed;
pub mod storage;
pub mod task;
