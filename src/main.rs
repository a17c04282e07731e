//! Runs the service manual HTTP API.
//!
//! Configuration comes from defaults, an optional TOML file named by
//! `SERVICE_MANUAL_CONFIG` and `SERVICE_MANUAL_*` environment overrides.
//! Logging honours `RUST_LOG`.

use mockable::{Clock, DefaultClock};
use rand::SeedableRng;
use rand::rngs::StdRng;
use service_manual::config::{ConfigError, ServiceConfig, StorageMode};
use service_manual::device::{
    adapters::{memory::InMemoryDeviceRepository, postgres::PostgresDeviceRepository},
    ports::DeviceRepository,
};
use service_manual::http::{AppState, router};
use service_manual::seed::seed_store;
use service_manual::storage::{self, StorageError};
use service_manual::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the startup path.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_LOG_FILTER: &str = "service_manual=info,tower_http=info";

struct Stores {
    tasks: Arc<dyn TaskRepository>,
    devices: Arc<dyn DeviceRepository>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "service manual stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BoxError> {
    let config = ServiceConfig::load()?;
    let stores = open_stores(&config).await?;

    if stores.devices.find_all().await?.is_empty() {
        let registered = DefaultClock.utc().naive_utc();
        let mut rng = StdRng::from_os_rng();
        seed_store(
            stores.devices.as_ref(),
            stores.tasks.as_ref(),
            config.seed,
            &mut rng,
            registered,
        )
        .await?;
    } else {
        tracing::info!("devices already present, skipping seed data");
    }

    let state = AppState::new(stores.tasks, stores.devices, config.base_url.clone());
    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(address = %config.bind, storage = ?config.storage, "service manual listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("service manual shut down");
    Ok(())
}

async fn open_stores(config: &ServiceConfig) -> Result<Stores, BoxError> {
    match config.storage {
        StorageMode::Memory => Ok(Stores {
            tasks: Arc::new(InMemoryTaskRepository::new()),
            devices: Arc::new(InMemoryDeviceRepository::new()),
        }),
        StorageMode::Postgres => {
            let url = config
                .database_url
                .clone()
                .ok_or(ConfigError::MissingDatabaseUrl)?;
            let pool_size = config.pool_size;
            let pool = tokio::task::spawn_blocking(move || {
                let built = storage::build_pool(&url, pool_size)?;
                storage::ensure_schema(&built)?;
                Ok::<_, StorageError>(built)
            })
            .await??;
            Ok(Stores {
                tasks: Arc::new(PostgresTaskRepository::new(pool.clone())),
                devices: Arc::new(PostgresDeviceRepository::new(pool)),
            })
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "could not listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "could not listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
