use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{CandidateProfile, RecommendationSummary};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub profile: CandidateProfile,
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// POST /api/v1/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(req): Json<RecommendationRequest>,
) -> Result<Json<Vec<RecommendationSummary>>, AppError> {
    let top_n = req.top_n.unwrap_or(state.config.default_top_n);
    if top_n == 0 {
        return Err(AppError::Validation("top_n must be at least 1".to_string()));
    }

    let engine = state.engine.clone();
    let recommendations = tokio::task::spawn_blocking(move || engine.recommend(&req.profile, top_n))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    Ok(Json(
        recommendations.iter().map(|r| r.summary()).collect(),
    ))
}
