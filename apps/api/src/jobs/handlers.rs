use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{JobPosting, NewJobPosting};
use crate::state::AppState;

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobPosting>> {
    Json(state.jobs.list_recent())
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(req): Json<NewJobPosting>,
) -> Result<(StatusCode, Json<JobPosting>), AppError> {
    let job = state.jobs.post(req)?;
    info!(job_id = %job.id, company = %job.company, "Job posted");

    // The engine does not watch the board; every new posting triggers a full rebuild.
    let engine = state.engine.clone();
    tokio::task::spawn_blocking(move || engine.rebuild())
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobPosting>, AppError> {
    state
        .jobs
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}
