use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::storage::StorageError;

const CORRUPT_STORE_MESSAGE: &str = "Fișierul de lead-uri nu poate fi citit.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            AppError::Storage(StorageError::CorruptStore { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                CORRUPT_STORE_MESSAGE.to_string(),
            ),
            AppError::Storage(StorageError::Io { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "lead storage unavailable".to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
