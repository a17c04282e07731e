//! API error responses.

use crate::device::services::DeviceServiceError;
use crate::task::services::{TaskInputError, TaskServiceError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// API error response containing status code and error details.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Error details.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new API error response.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// Creates a 400 Bad Request response.
    #[must_use]
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiError::new(code, message))
    }

    /// Creates a 404 Not Found response.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", message))
    }

    /// Creates a 500 Internal Server Error response.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("INTERNAL_ERROR", message),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TaskInputError> for ApiErrorResponse {
    fn from(error: TaskInputError) -> Self {
        let code = match &error {
            TaskInputError::UnknownParameter { .. } => "UNKNOWN_PARAMETER",
            TaskInputError::UnconvertibleValue { .. } => "UNCONVERTIBLE_VALUE",
            TaskInputError::EmptyDescription => "EMPTY_DESCRIPTION",
            TaskInputError::EmptyBody => "EMPTY_BODY",
            TaskInputError::MissingProperty(_) => "MISSING_PROPERTY",
        };
        Self::bad_request(code, error.to_string())
    }
}

impl From<TaskServiceError> for ApiErrorResponse {
    fn from(error: TaskServiceError) -> Self {
        match error {
            TaskServiceError::Input(input) => input.into(),
            TaskServiceError::DeviceNotFound(_) | TaskServiceError::TaskNotFound(_) => {
                Self::not_found(error.to_string())
            }
            TaskServiceError::Repository(_) | TaskServiceError::DeviceRepository(_) => {
                tracing::error!(%error, "task storage failure");
                Self::internal_error("internal server error")
            }
        }
    }
}

impl From<DeviceServiceError> for ApiErrorResponse {
    fn from(error: DeviceServiceError) -> Self {
        match error {
            DeviceServiceError::Domain(_) => Self::bad_request("INVALID_DEVICE", error.to_string()),
            DeviceServiceError::NotFound(_) => Self::not_found(error.to_string()),
            DeviceServiceError::Repository(_) => {
                tracing::error!(%error, "device storage failure");
                Self::internal_error("internal server error")
            }
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            rejection.status(),
            ApiError::new("MALFORMED_BODY", rejection.body_text()),
        )
    }
}
