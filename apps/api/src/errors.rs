use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::AssemblyError;
use crate::storage::StorageError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(name) => AppError::NotFound(format!("File {name} not found")),
            // Names that could escape the upload directory are reported as missing.
            StorageError::InvalidName(name) => {
                AppError::NotFound(format!("File {name} not found"))
            }
            StorageError::AlreadyExists(name) => {
                AppError::Storage(format!("artifact {name} already exists"))
            }
            StorageError::Io(e) => AppError::Storage(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            AppError::Assembly(e) => {
                tracing::error!("Assembly error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ASSEMBLY_ERROR",
                    "Failed to generate resume".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = json!(details);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
