use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use intake_core::models::response::SubmitFailure;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                // Diagnostic detail stays server-side; the caller gets a
                // generic application error.
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = SubmitFailure {
            success: false,
            error: message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<intake_storage::error::StorageError> for ApiError {
    fn from(e: intake_storage::error::StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<intake_export::error::ExportError> for ApiError {
    fn from(e: intake_export::error::ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
