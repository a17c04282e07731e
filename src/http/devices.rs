//! Device endpoints.

use super::dto::{DeviceCollectionModel, DeviceModel};
use super::error::ApiErrorResponse;
use super::state::AppState;
use crate::device::domain::DeviceId;
use axum::{
    Json,
    extract::{Path, State},
};

/// `GET /api/factorydevices`: lists every device.
///
/// # Errors
///
/// Returns 500 when the store fails.
pub async fn list_devices(
    State(state): State<AppState>,
) -> Result<Json<DeviceCollectionModel>, ApiErrorResponse> {
    let devices = state.devices().list_devices().await?;
    Ok(Json(DeviceCollectionModel::from_devices(
        &devices,
        state.links(),
    )))
}

/// `GET /api/factorydevices/{id}`: fetches one device.
///
/// # Errors
///
/// Returns 404 when the device does not exist.
pub async fn get_device(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeviceModel>, ApiErrorResponse> {
    let device = state.devices().find_device(DeviceId::new(id)).await?;
    Ok(Json(DeviceModel::from_device(&device, state.links())))
}
