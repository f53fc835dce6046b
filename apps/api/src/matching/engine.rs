//! Recommendation engine — owns the corpus index and ranks jobs for a profile.
//!
//! The index is an immutable snapshot behind an `Arc`. A rebuild fits a new
//! snapshot from the full catalog and swaps it in under a write lock, so a
//! reader always sees jobs and vectors from the same generation. Rebuilds are
//! serialized end to end, so an older catalog read never publishes over a
//! newer one.

use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, info};

use crate::errors::AppError;
use crate::matching::bonus::{compute_bonuses, final_score};
use crate::matching::similarity::{score_all, select_top};
use crate::matching::vectorizer::{SparseVector, TextVectorizer};
use crate::models::{CandidateProfile, JobPosting, Recommendation};

/// Results returned when the caller does not ask for a specific count.
pub const DEFAULT_TOP_N: usize = 5;

/// Characters of extracted resume text folded into the query.
pub const RESUME_PREFIX_CHARS: usize = 1000;

/// Source of job postings. The engine reads through this and never writes.
pub trait JobCatalog: Send + Sync {
    /// Every current posting, in a stable order.
    fn all_jobs(&self) -> Vec<JobPosting>;
}

/// Fitted vectorizer plus the jobs it was fitted on. `jobs[i]` owns `vectors[i]`.
#[derive(Debug)]
pub struct CorpusIndex {
    vectorizer: TextVectorizer,
    jobs: Vec<JobPosting>,
    vectors: Vec<SparseVector>,
}

impl CorpusIndex {
    pub fn build(jobs: Vec<JobPosting>) -> Self {
        let corpus: Vec<String> = jobs.iter().map(JobPosting::corpus_text).collect();
        let mut vectorizer = TextVectorizer::default();
        let vectors = vectorizer.fit(&corpus);
        Self {
            vectorizer,
            jobs,
            vectors,
        }
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vectorizer.vocabulary_len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Ranks this snapshot's jobs for `profile`.
    pub fn recommend(
        &self,
        profile: &CandidateProfile,
        top_n: usize,
    ) -> Result<Vec<Recommendation>, AppError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let query = build_query_text(profile);
        let profile_vector = self.vectorizer.transform(&query)?;
        let scores = score_all(&profile_vector, &self.vectors);
        let candidates = select_top(&scores, top_n);

        let mut recommendations: Vec<Recommendation> = candidates
            .into_iter()
            .map(|candidate| {
                let job = &self.jobs[candidate.index];
                let bonuses = compute_bonuses(profile.resume.as_ref(), job);
                Recommendation {
                    job: job.clone(),
                    similarity: candidate.similarity,
                    bonuses,
                    final_score: final_score(candidate.similarity, &bonuses),
                }
            })
            .collect();
        recommendations.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));

        debug!(
            profile_id = %profile.id,
            matched = recommendations.len(),
            "Scored profile against {} jobs",
            self.jobs.len()
        );
        Ok(recommendations)
    }
}

/// Declared skills (plus extracted skills), a resume prefix, declared
/// experience and declared education, space separated.
pub fn build_query_text(profile: &CandidateProfile) -> String {
    let mut skills = profile.skills.clone();
    let extracted = profile.extracted_skills();
    if !extracted.is_empty() {
        skills.push_str(", ");
        skills.push_str(&extracted.join(", "));
    }
    let resume_prefix: String = profile
        .resume_text()
        .map(|t| t.chars().take(RESUME_PREFIX_CHARS).collect())
        .unwrap_or_default();

    format!(
        "{} {} {} {}",
        skills, resume_prefix, profile.experience, profile.education
    )
}

pub struct RecommendationEngine {
    catalog: Arc<dyn JobCatalog>,
    index: RwLock<Option<Arc<CorpusIndex>>>,
    /// Serializes read-catalog, fit, publish. Readers only take `index`.
    rebuild_lock: Mutex<()>,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<dyn JobCatalog>) -> Self {
        Self {
            catalog,
            index: RwLock::new(None),
            rebuild_lock: Mutex::new(()),
        }
    }

    /// Fits a fresh index over the whole catalog and publishes it.
    /// Must be called after any posting is created.
    pub fn rebuild(&self) -> Arc<CorpusIndex> {
        let _guard = self.rebuild_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.build_and_publish()
    }

    /// Caller must hold `rebuild_lock`.
    fn build_and_publish(&self) -> Arc<CorpusIndex> {
        let index = Arc::new(CorpusIndex::build(self.catalog.all_jobs()));
        info!(
            jobs = index.jobs().len(),
            vocabulary = index.vocabulary_len(),
            "Corpus index rebuilt"
        );
        let mut slot = self.index.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Arc::clone(&index));
        index
    }

    fn published(&self) -> Option<Arc<CorpusIndex>> {
        self.index.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Drops the current snapshot; the next request rebuilds.
    pub fn invalidate(&self) {
        let mut slot = self.index.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    /// Current snapshot, building one on first use.
    pub fn snapshot(&self) -> Arc<CorpusIndex> {
        if let Some(index) = self.published() {
            return index;
        }
        let _guard = self.rebuild_lock.lock().unwrap_or_else(|e| e.into_inner());
        // Another caller may have published while we waited.
        match self.published() {
            Some(index) => index,
            None => self.build_and_publish(),
        }
    }

    pub fn recommend(
        &self,
        profile: &CandidateProfile,
        top_n: usize,
    ) -> Result<Vec<Recommendation>, AppError> {
        self.snapshot().recommend(profile, top_n)
    }
}
