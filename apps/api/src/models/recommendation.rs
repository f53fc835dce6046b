use serde::Serialize;
use uuid::Uuid;

use crate::models::job::JobPosting;

/// Longest description prefix shown in a recommendation summary.
const SUMMARY_DESCRIPTION_CHARS: usize = 200;

/// Additive score adjustments applied on top of raw text similarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BonusBreakdown {
    pub experience: f64,
    pub education: f64,
    pub skills: f64,
}

impl BonusBreakdown {
    pub fn total(&self) -> f64 {
        self.experience + self.education + self.skills
    }
}

/// One ranked match. Ephemeral, produced per request.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub job: JobPosting,
    /// Raw cosine similarity in [0, 1].
    pub similarity: f64,
    pub bonuses: BonusBreakdown,
    /// `min(1, similarity + bonuses)`.
    pub final_score: f64,
}

impl Recommendation {
    pub fn match_percentage(&self) -> f64 {
        to_percentage(self.final_score)
    }

    pub fn base_percentage(&self) -> f64 {
        to_percentage(self.similarity)
    }

    pub fn summary(&self) -> RecommendationSummary {
        RecommendationSummary {
            job_id: self.job.id,
            title: self.job.title.clone(),
            company: self.job.company.clone(),
            description: truncate_description(&self.job.description),
            location: self.job.location.clone(),
            match_percentage: self.match_percentage(),
            base_score: self.base_percentage(),
            bonuses: BonusBreakdown {
                experience: to_percentage(self.bonuses.experience),
                education: to_percentage(self.bonuses.education),
                skills: to_percentage(self.bonuses.skills),
            },
        }
    }
}

/// "Why this match" view handed to the presentation layer. All scores are
/// percentages rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSummary {
    pub job_id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub match_percentage: f64,
    pub base_score: f64,
    pub bonuses: BonusBreakdown,
}

/// Converts a [0, 1] score to a percentage with one decimal.
pub fn to_percentage(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

fn truncate_description(description: &str) -> String {
    let prefix: String = description.chars().take(SUMMARY_DESCRIPTION_CHARS).collect();
    format!("{prefix}...")
}
