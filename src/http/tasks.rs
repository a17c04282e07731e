//! Task endpoints.

use super::dto::{DeletionModel, TaskCollectionModel, TaskModel, body_parameters};
use super::error::ApiErrorResponse;
use super::state::AppState;
use crate::task::{domain::TaskId, services::RawParameters};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Map, Value};

type JsonBody = Result<Json<Map<String, Value>>, JsonRejection>;

/// `GET /api/tasks`: lists tasks matching the query parameters.
///
/// # Errors
///
/// Returns 400 for unknown parameters or unconvertible values.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<TaskCollectionModel>, ApiErrorResponse> {
    let params: RawParameters = query.into_iter().collect();
    let resolved = state.tasks().list_tasks(&params).await?;
    Ok(Json(TaskCollectionModel::from_resolved(
        &resolved,
        state.links(),
    )))
}

/// `DELETE /api/tasks`: deletes every task matching the query parameters.
///
/// # Errors
///
/// Returns 400 for unknown parameters or unconvertible values.
pub async fn delete_matching(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<DeletionModel>, ApiErrorResponse> {
    let params: RawParameters = query.into_iter().collect();
    let deleted = state.tasks().delete_matching(&params).await?;
    Ok(Json(DeletionModel { deleted }))
}

/// `POST /api/tasks`: creates a task.
///
/// # Errors
///
/// Returns 400 for invalid or missing properties and 404 when the device does
/// not exist.
pub async fn create_task(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<TaskModel>), ApiErrorResponse> {
    let Json(body) = body?;
    let created = state.tasks().create_task(&body_parameters(body)).await?;
    Ok((
        StatusCode::CREATED,
        Json(TaskModel::from_task(&created, state.links())),
    ))
}

/// `GET /api/tasks/{id}`: fetches one task.
///
/// # Errors
///
/// Returns 404 when the task does not exist.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TaskModel>, ApiErrorResponse> {
    let task = state.tasks().find_task(TaskId::new(id)).await?;
    Ok(Json(TaskModel::from_task(&task, state.links())))
}

/// `DELETE /api/tasks/{id}`: deletes one task.
///
/// # Errors
///
/// Returns 404 when the task does not exist.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeletionModel>, ApiErrorResponse> {
    state.tasks().delete_task(TaskId::new(id)).await?;
    Ok(Json(DeletionModel { deleted: 1 }))
}

/// `PATCH /api/tasks/{id}`: changes the supplied properties of one task.
///
/// # Errors
///
/// Returns 404 when the task or a new device does not exist and 400 for
/// empty bodies, unknown properties or unconvertible values.
pub async fn edit_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: JsonBody,
) -> Result<Json<TaskModel>, ApiErrorResponse> {
    let Json(body) = body?;
    let edited = state
        .tasks()
        .edit_task(TaskId::new(id), &body_parameters(body))
        .await?;
    Ok(Json(TaskModel::from_task(&edited, state.links())))
}
