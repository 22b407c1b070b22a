//! Application error type mapping to HTTP status codes.
//!
//! Every error body uses the wire envelope the frontend already speaks:
//! `{ "status": "error", "error": "..." }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use tiendita_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request (not JSON, missing required field).
    BadRequest(String),
    /// Unknown session on a history lookup.
    SessionNotFound,
    /// Catalog load or model gateway failure.
    Upstream(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::SessionNotFound => AppError::SessionNotFound,
            ChatError::Store(e) => AppError::Upstream(e.to_string()),
            ChatError::Catalog(e) => AppError::Upstream(e.to_string()),
            ChatError::Gateway(e) => AppError::Upstream(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::SessionNotFound => {
                (StatusCode::NOT_FOUND, "Sesión no encontrada".to_string())
            }
            AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = json!({
            "status": "error",
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
