/// API error types with IntoResponse
///
/// Errors are converted to `{"detail": "..."}` JSON bodies with the matching
/// status code. Unhandled storage failures are logged and answered with a
/// generic message.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;
use crate::user::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload content rejected (422)
    Validation(ValidationError),

    /// Request body missing, malformed, or of the wrong shape (422)
    InvalidBody(String),

    /// Resource not found (404)
    NotFound { resource: &'static str },

    /// Uniqueness constraint violated (409)
    Conflict(String),

    /// Any other failure (500, logged)
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::Validation(e) => e.to_string(),
            Self::InvalidBody(message) => message,
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::Conflict(message) => message,
            Self::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                "an internal error occurred".to_string()
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, .. } => Self::NotFound { resource },
            StoreError::Conflict(message) => Self::Conflict(message),
            StoreError::Database(e) => Self::Internal(e.to_string()),
        }
    }
}
