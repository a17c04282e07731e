//! `PostgreSQL` pool construction and schema bootstrap.

use diesel::pg::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// Connection pool shared by the device and task adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Idempotent DDL for the device and task tables.
pub const SCHEMA_SQL: &str =
    include_str!("../migrations/2026-10-16-000000_create_devices_and_tasks/up.sql");

/// Errors raised while preparing `PostgreSQL` storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The pool could not be built or could not hand out a connection.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    /// Applying the schema failed.
    #[error("schema bootstrap failed: {0}")]
    Schema(#[from] diesel::result::Error),
}

/// Builds a pool of at most `max_size` connections to `database_url`.
///
/// # Errors
///
/// Returns [`StorageError::Pool`] when the initial connections cannot be
/// established.
pub fn build_pool(database_url: &str, max_size: u32) -> Result<PgPool, StorageError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Ok(Pool::builder().max_size(max_size).build(manager)?)
}

/// Creates the device and task tables when they do not exist yet.
///
/// Blocks on the database; call it from a blocking context.
///
/// # Errors
///
/// Returns [`StorageError`] when no connection is available or the DDL fails.
pub fn ensure_schema(pool: &PgPool) -> Result<(), StorageError> {
    let mut connection = pool.get()?;
    connection.batch_execute(SCHEMA_SQL)?;
    tracing::info!("database schema ready");
    Ok(())
}
