use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::JobCatalog;
use crate::models::{JobPosting, NewJobPosting};

/// Insertion-ordered posting list. The engine fits its corpus in this order.
#[derive(Debug, Default)]
pub struct JobBoard {
    jobs: RwLock<Vec<JobPosting>>,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&self, new_job: NewJobPosting) -> Result<JobPosting, AppError> {
        let missing = new_job.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }
        let job = new_job.into_posting(Uuid::new_v4(), Utc::now());
        self.jobs
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(job.clone());
        Ok(job)
    }

    pub fn get(&self, id: Uuid) -> Option<JobPosting> {
        self.jobs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|j| j.id == id)
            .cloned()
    }

    /// Newest first; postings with equal timestamps keep insertion order reversed.
    pub fn list_recent(&self) -> Vec<JobPosting> {
        let mut jobs = self.all_jobs();
        jobs.reverse();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl JobCatalog for JobBoard {
    fn all_jobs(&self) -> Vec<JobPosting> {
        self.jobs.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
