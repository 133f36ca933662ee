use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use codeshare_core::error::ValidationError;
use codeshare_core::models::api::ErrorResponse;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// `message` goes to the client; `cause` only to the logs.
    Internal {
        message: &'static str,
        cause: String,
    },
}

impl ApiError {
    pub fn internal(message: &'static str, cause: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            message,
            cause: cause.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal { message, cause } => {
                tracing::error!(cause = %cause, "internal error: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
