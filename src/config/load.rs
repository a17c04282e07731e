//! File and environment layers.

use super::{ConfigError, ConfigLayer, ServiceConfig, StorageMode};
use std::fs;
use std::path::PathBuf;

/// Environment variable naming the optional TOML configuration file.
pub const CONFIG_PATH_VAR: &str = "SERVICE_MANUAL_CONFIG";

pub(super) fn read_layer(path: PathBuf) -> Result<ConfigLayer, ConfigError> {
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path,
        source: Box::new(source),
    })
}

/// Applies `SERVICE_MANUAL_*` and `DATABASE_URL` overrides from `lookup`.
///
/// Blank values are ignored. Values that do not parse are logged and ignored.
pub fn apply_env_overrides(config: &mut ServiceConfig, lookup: impl Fn(&str) -> Option<String>) {
    let read = |key: &str| {
        lookup(key)
            .map(|raw| raw.trim().to_owned())
            .filter(|value| !value.is_empty())
    };

    if let Some(raw) = read("SERVICE_MANUAL_BIND") {
        match raw.parse() {
            Ok(bind) => config.bind = bind,
            Err(err) => tracing::warn!("invalid SERVICE_MANUAL_BIND, ignoring: {err}"),
        }
    }

    if let Some(raw) = read("SERVICE_MANUAL_STORAGE") {
        match StorageMode::from_name(&raw) {
            Some(storage) => config.storage = storage,
            None => tracing::warn!("invalid SERVICE_MANUAL_STORAGE '{raw}', ignoring"),
        }
    }

    if let Some(url) = read("DATABASE_URL") {
        config.database_url = Some(url);
    }

    if let Some(raw) = read("SERVICE_MANUAL_POOL_SIZE") {
        match raw.parse() {
            Ok(pool_size) => config.pool_size = pool_size,
            Err(err) => tracing::warn!("invalid SERVICE_MANUAL_POOL_SIZE, ignoring: {err}"),
        }
    }

    if let Some(raw) = read("SERVICE_MANUAL_SEED_DEVICES") {
        match raw.parse() {
            Ok(devices) => config.seed.devices = devices,
            Err(err) => tracing::warn!("invalid SERVICE_MANUAL_SEED_DEVICES, ignoring: {err}"),
        }
    }

    if let Some(raw) = read("SERVICE_MANUAL_SEED_TASKS") {
        match raw.parse() {
            Ok(tasks) => config.seed.tasks_per_device = tasks,
            Err(err) => tracing::warn!("invalid SERVICE_MANUAL_SEED_TASKS, ignoring: {err}"),
        }
    }

    if let Some(base_url) = read("SERVICE_MANUAL_BASE_URL") {
        config.base_url = base_url;
    }
}
