//! Axum route handlers for resume generation and download.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::document::{generate_resume, AssemblyError};
use crate::errors::AppError;
use crate::models::resume::ResumeSubmission;
use crate::resume::filename::artifact_filename;
use crate::resume::validation::validate_submission;
use crate::state::AppState;
use crate::storage::StorageError;

pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub message: String,
    pub download_url: String,
    pub filename: String,
}

/// POST /api/generate-resume
///
/// Validates the submission, builds the document, stores it, and returns a
/// one-shot download reference. Nothing is stored unless every step succeeds.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(submission): Json<ResumeSubmission>,
) -> Result<Json<GenerateResponse>, AppError> {
    let record = validate_submission(submission)?;

    let person_name = record.personal_info.name.clone();
    let docx = tokio::task::spawn_blocking(move || generate_resume(&record))
        .await
        .map_err(|e| AssemblyError::Task(e.to_string()))??;

    // Names are timestamped to the millisecond; step forward on the rare clash.
    let mut timestamp = Utc::now().timestamp_millis();
    let filename = loop {
        let candidate = artifact_filename(&person_name, timestamp);
        match state.store.put(&candidate, &docx).await {
            Ok(()) => break candidate,
            Err(StorageError::AlreadyExists(_)) => timestamp += 1,
            Err(e) => return Err(e.into()),
        }
    };

    info!("Generated {filename} ({} bytes)", docx.len());

    Ok(Json(GenerateResponse {
        success: true,
        message: "Resume generated successfully".to_string(),
        download_url: format!("/api/download/{filename}"),
        filename,
    }))
}

/// GET /api/download/:filename
///
/// Streams the stored document once. The artifact is removed as part of the
/// transfer; any later request for the same name is a 404.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let bytes = state.store.take(&filename).await?;
    info!("Downloaded {filename} ({} bytes)", bytes.len());

    let disposition = format!("attachment; filename=\"{filename}\"");
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MEDIA_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(bytes),
    )
        .into_response())
}
