use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::parsing::extract::DecodeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload error: {message}")]
    Upload { status: StatusCode, message: String },

    #[error("Role '{0}' not supported")]
    UnknownRole(String),

    #[error("Failed to process document: {0}")]
    Decode(#[from] DecodeError),

    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Upload { status, .. } if *status == StatusCode::PAYLOAD_TOO_LARGE => {
                (*status, "PAYLOAD_TOO_LARGE")
            }
            AppError::Upload { status, .. } => (*status, "UPLOAD_ERROR"),
            AppError::UnknownRole(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_ROLE"),
            AppError::Decode(_) => (StatusCode::INTERNAL_SERVER_ERROR, "PROCESSING_ERROR"),
            AppError::Embedding(_) => (StatusCode::BAD_GATEWAY, "EMBEDDING_ERROR"),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::Upload {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(code, "{self}");
        } else {
            tracing::debug!(code, "{self}");
        }

        // Every failure carries its cause; callers decide whether to retry.
        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}
