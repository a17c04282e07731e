//! HTTP surface.
//!
//! JSON endpoints for devices and tasks with HAL-style `_links`. Handlers
//! turn query strings and bodies into [`RawParameters`](crate::task::services::RawParameters)
//! and leave all validation to the services.

pub mod devices;
pub mod dto;
pub mod error;
pub mod links;
pub mod state;
pub mod tasks;

pub use error::{ApiError, ApiErrorResponse};
pub use links::{Link, LinkBuilder};
pub use state::AppState;

use axum::{Json, Router, routing::get};
use dto::HealthModel;
use tower_http::trace::TraceLayer;

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/factorydevices", get(devices::list_devices))
        .route("/api/factorydevices/{id}", get(devices::get_device))
        .route(
            "/api/tasks",
            get(tasks::list_tasks)
                .post(tasks::create_task)
                .delete(tasks::delete_matching),
        )
        .route(
            "/api/tasks/{id}",
            get(tasks::get_task)
                .patch(tasks::edit_task)
                .delete(tasks::delete_task),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /health`: liveness probe.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health() -> Json<HealthModel> {
    Json(HealthModel { status: "ok" })
}
