//! Runtime configuration for the service binary.
//!
//! Values are layered: built-in defaults, then an optional TOML file named by
//! `SERVICE_MANUAL_CONFIG`, then individual environment variables.

mod load;


pub use load::{CONFIG_PATH_VAR, apply_env_overrides};

use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

/// Backing store selected at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Process-local maps; data is lost on exit.
    #[default]
    Memory,
    /// `PostgreSQL` through Diesel.
    Postgres,
}

impl StorageMode {
    /// Parses `memory` or `postgres`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "memory" => Some(Self::Memory),
            "postgres" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Random data inserted at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    /// Number of devices to create.
    pub devices: usize,
    /// Number of tasks to create for each device.
    pub tasks_per_device: usize,
}

impl SeedConfig {
    /// Returns `true` when nothing would be inserted.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.devices == 0
    }
}

/// Fully resolved service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to.
    pub bind: SocketAddr,
    /// Selected backing store.
    pub storage: StorageMode,
    /// Connection string used when `storage` is `postgres`.
    pub database_url: Option<String>,
    /// Maximum size of the `PostgreSQL` connection pool.
    pub pool_size: u32,
    /// Startup seed volumes.
    pub seed: SeedConfig,
    /// Public URL prefix for hypermedia links, without a trailing slash.
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            storage: StorageMode::Memory,
            database_url: None,
            pool_size: 8,
            seed: SeedConfig {
                devices: 3,
                tasks_per_device: 5,
            },
            base_url: String::new(),
        }
    }
}

/// Optional values read from the TOML configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    /// Listener address.
    pub bind: Option<SocketAddr>,
    /// Backing store.
    pub storage: Option<StorageMode>,
    /// `PostgreSQL` connection string.
    pub database_url: Option<String>,
    /// Connection pool size.
    pub pool_size: Option<u32>,
    /// Devices created at startup.
    pub seed_devices: Option<usize>,
    /// Tasks created per seeded device.
    pub seed_tasks: Option<usize>,
    /// Public URL prefix for links.
    pub base_url: Option<String>,
}

impl ConfigLayer {
    /// Overwrites every value of `config` this layer sets.
    pub fn apply_to(self, config: &mut ServiceConfig) {
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(storage) = self.storage {
            config.storage = storage;
        }
        if self.database_url.is_some() {
            config.database_url = self.database_url;
        }
        if let Some(pool_size) = self.pool_size {
            config.pool_size = pool_size;
        }
        if let Some(devices) = self.seed_devices {
            config.seed.devices = devices;
        }
        if let Some(tasks) = self.seed_tasks {
            config.seed.tasks_per_device = tasks;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}", path = .path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this service.
    #[error("failed to parse {path}: {source}", path = .path.display())]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// `postgres` storage was selected without a connection string.
    #[error("storage is postgres but no database URL is configured")]
    MissingDatabaseUrl,

    /// The pool would not hold any connection.
    #[error("pool size must be at least 1")]
    InvalidPoolSize,
}

impl ServiceConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration file cannot be read or
    /// parsed, or when the resolved values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` in place of the environment.
    ///
    /// # Errors
    ///
    /// See [`ServiceConfig::load`].
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = lookup(CONFIG_PATH_VAR) {
            load::read_layer(PathBuf::from(path))?.apply_to(&mut config);
        }
        apply_env_overrides(&mut config, &lookup);
        config.base_url = config.base_url.trim_end_matches('/').to_owned();
        config.validate()?;
        Ok(config)
    }

    /// Checks that the resolved values can start the service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] or
    /// [`ConfigError::InvalidPoolSize`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage == StorageMode::Postgres && self.database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        if self.pool_size == 0 {
            return Err(ConfigError::InvalidPoolSize);
        }
        Ok(())
    }
}
