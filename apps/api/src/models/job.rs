use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::candidate::ExperienceLevel;

/// A job posting as supplied by the storage layer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    /// Free text, conventionally a comma or semicolon separated list.
    pub required_skills: String,
    pub experience_required: ExperienceLevel,
    pub location: String,
    pub salary: Option<String>,
    pub job_type: String,
    pub posted_by: String,
    pub contact_email: String,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    /// Text the vectorizer is fitted on: title, description and required skills.
    pub fn corpus_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title, self.description, self.required_skills
        )
    }
}

/// Payload for creating a posting. Id and timestamp are assigned on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJobPosting {
    pub title: String,
    pub company: String,
    pub description: String,
    pub required_skills: String,
    pub experience_required: ExperienceLevel,
    pub location: String,
    #[serde(default)]
    pub salary: Option<String>,
    pub job_type: String,
    pub posted_by: String,
    pub contact_email: String,
}

impl NewJobPosting {
    pub fn into_posting(self, id: Uuid, created_at: DateTime<Utc>) -> JobPosting {
        JobPosting {
            id,
            title: self.title,
            company: self.company,
            description: self.description,
            required_skills: self.required_skills,
            experience_required: self.experience_required,
            location: self.location,
            salary: self.salary.filter(|s| !s.trim().is_empty()),
            job_type: self.job_type,
            posted_by: self.posted_by,
            contact_email: self.contact_email,
            created_at,
        }
    }

    /// Rejects postings missing any required free-text field.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("company", &self.company),
            ("description", &self.description),
            ("required_skills", &self.required_skills),
            ("location", &self.location),
            ("job_type", &self.job_type),
            ("posted_by", &self.posted_by),
            ("contact_email", &self.contact_email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
