use std::sync::Arc;

use crate::config::Config;
use crate::jobs::JobBoard;
use crate::matching::RecommendationEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stand-in for the storage layer; also the engine's job catalog.
    pub jobs: Arc<JobBoard>,
    pub engine: Arc<RecommendationEngine>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let jobs = Arc::new(JobBoard::new());
        let engine = Arc::new(RecommendationEngine::new(jobs.clone()));
        Self {
            config,
            jobs,
            engine,
        }
    }
}
