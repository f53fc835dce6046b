use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered experience buckets. Ordering drives compatibility comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "0-1 years")]
    UpToOne,
    #[serde(rename = "1-3 years")]
    OneToThree,
    #[serde(rename = "3-5 years")]
    ThreeToFive,
    #[serde(rename = "5-10 years")]
    FiveToTen,
    /// Never produced by the resume parser; reserved for manually entered profiles.
    #[serde(rename = "10+ years")]
    TenPlus,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 5] = [
        ExperienceLevel::UpToOne,
        ExperienceLevel::OneToThree,
        ExperienceLevel::ThreeToFive,
        ExperienceLevel::FiveToTen,
        ExperienceLevel::TenPlus,
    ];

    /// 1-based position in the ordering (1..=5).
    pub fn ordinal(self) -> u8 {
        match self {
            ExperienceLevel::UpToOne => 1,
            ExperienceLevel::OneToThree => 2,
            ExperienceLevel::ThreeToFive => 3,
            ExperienceLevel::FiveToTen => 4,
            ExperienceLevel::TenPlus => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::UpToOne => "0-1 years",
            ExperienceLevel::OneToThree => "1-3 years",
            ExperienceLevel::ThreeToFive => "3-5 years",
            ExperienceLevel::FiveToTen => "5-10 years",
            ExperienceLevel::TenPlus => "10+ years",
        }
    }

    /// Buckets a parsed year count. The top bucket is unreachable from here.
    pub fn from_years(years: u32) -> Self {
        if years >= 5 {
            ExperienceLevel::FiveToTen
        } else if years >= 3 {
            ExperienceLevel::ThreeToFive
        } else if years >= 1 {
            ExperienceLevel::OneToThree
        } else {
            ExperienceLevel::UpToOne
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Single best-guess education label extracted from a resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLabel {
    #[default]
    #[serde(rename = "Bachelor's Degree")]
    Bachelors,
    #[serde(rename = "Master's Degree")]
    Masters,
    #[serde(rename = "PhD")]
    Phd,
    #[serde(rename = "Diploma")]
    Diploma,
}

impl EducationLabel {
    pub fn label(self) -> &'static str {
        match self {
            EducationLabel::Bachelors => "Bachelor's Degree",
            EducationLabel::Masters => "Master's Degree",
            EducationLabel::Phd => "PhD",
            EducationLabel::Diploma => "Diploma",
        }
    }
}

impl fmt::Display for EducationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured signals the resume parser attaches to a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSignals {
    /// Deduplicated, in skill-vocabulary order.
    pub extracted_skills: Vec<String>,
    pub experience_years: u32,
    pub experience_level: ExperienceLevel,
    pub education: EducationLabel,
    /// Full lower-cased document text.
    pub resume_text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub resume: Option<ResumeSignals>,
}

impl CandidateProfile {
    pub fn extracted_skills(&self) -> &[String] {
        self.resume
            .as_ref()
            .map(|r| r.extracted_skills.as_slice())
            .unwrap_or_default()
    }

    pub fn resume_text(&self) -> Option<&str> {
        self.resume
            .as_ref()
            .map(|r| r.resume_text.as_str())
            .filter(|t| !t.is_empty())
    }
}
