//! Unified error handling for the server.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] depot_engine::Error),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid JSON body: {0}")]
    Body(#[from] JsonRejection),
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match &self {
            AppError::Engine(e @ depot_engine::Error::FamilyNotFound(_)) => (
                StatusCode::NOT_FOUND,
                "Not found".to_string(),
                Some(e.to_string()),
            ),
            AppError::Engine(e) => {
                tracing::warn!("Engine error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid record".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Body(rejection) => (
                StatusCode::BAD_REQUEST,
                "Invalid JSON body".to_string(),
                Some(rejection.body_text()),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
