//! Axum route handlers for the cover-letter API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::letters::pipeline::{run_pipeline, UploadedDocument};
use crate::state::AppState;

/// Path the generated letter can be fetched from, echoed in responses.
pub const DOWNLOAD_ROUTE: &str = "/api/v1/letters/download";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateLetterResponse {
    pub cover_letter: String,
    pub download_path: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/letters
///
/// Accepts `multipart/form-data` with parts `cv` and `job_description`,
/// runs the full pipeline, and returns the letter text plus the download
/// path of the rendered PDF. Both parts are required; a missing or empty
/// part is the one user-visible failure distinct from degraded output.
pub async fn handle_generate_letter(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<GenerateLetterResponse>, AppError> {
    let mut cv: Option<UploadedDocument> = None;
    let mut job_description: Option<UploadedDocument> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        match name.as_str() {
            "cv" => cv = Some(UploadedDocument { filename, bytes }),
            "job_description" => job_description = Some(UploadedDocument { filename, bytes }),
            // Unknown parts are ignored.
            _ => {}
        }
    }

    let (cv, job_description) = match (cv, job_description) {
        (Some(cv), Some(jd)) if !cv.bytes.is_empty() && !jd.bytes.is_empty() => (cv, jd),
        _ => {
            return Err(AppError::Validation(
                "Both CV and job description files are required".to_string(),
            ))
        }
    };

    state.store.save_upload(&cv)?;
    state.store.save_upload(&job_description)?;

    let output = run_pipeline(
        state.generator.as_ref(),
        &state.layout,
        &cv,
        &job_description,
    )
    .await?;

    state.store.save_letter(&output.pdf)?;

    Ok(Json(GenerateLetterResponse {
        cover_letter: output.cover_letter,
        download_path: DOWNLOAD_ROUTE.to_string(),
    }))
}

/// GET /api/v1/letters/download
///
/// Re-reads the rendered PDF from its well-known path and streams it back
/// as an attachment. 404 until the first letter has been generated.
pub async fn handle_download_letter(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = match state.store.read_letter() {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(
                "No cover letter has been generated yet".to_string(),
            ))
        }
        Err(e) => return Err(AppError::Internal(e.into())),
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.config.letter_filename
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}
