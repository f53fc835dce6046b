use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::ResumeSignals;
use crate::resume::extract::DocumentKind;
use crate::resume::parser::parse_resume_bytes;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub file_name: String,
    /// `null` when nothing could be extracted; the profile proceeds unparsed.
    pub signals: Option<ResumeSignals>,
}

/// POST /api/v1/resumes/parse
/// Multipart upload with a `resume` file field (pdf, doc or docx).
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let (file_name, data) = read_resume_field(&mut multipart).await?;

    let kind = DocumentKind::from_file_name(&file_name).ok_or_else(|| {
        AppError::Validation(
            "Invalid file format. Please upload PDF, DOC, or DOCX files only.".to_string(),
        )
    })?;
    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Resume exceeds {} bytes",
            state.config.max_upload_bytes
        )));
    }

    let timeout = state.config.resume_parse_timeout;
    let parse = tokio::task::spawn_blocking(move || parse_resume_bytes(&data, kind));
    let signals = match tokio::time::timeout(timeout, parse).await {
        Ok(Ok(signals)) => signals,
        Ok(Err(e)) => {
            warn!("Resume parse task failed for {file_name}: {e}");
            None
        }
        Err(_) => {
            warn!("Resume parse timed out after {timeout:?} for {file_name}");
            None
        }
    };

    info!(
        file_name = %file_name,
        parsed = signals.is_some(),
        "Resume upload processed"
    );
    Ok(Json(ParseResumeResponse { file_name, signals }))
}

async fn read_resume_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::Validation("No resume file selected".to_string()))?;
        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok((file_name, data));
    }
    Err(AppError::Validation(format!(
        "Missing multipart field '{RESUME_FIELD}'"
    )))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}
