//! Structured bonuses layered on top of text similarity.
//!
//! Each bonus is independent and capped; together they never exceed
//! `EXPERIENCE_EXACT + EDUCATION_MATCH + SKILLS_CAP` (0.35).

use crate::models::{BonusBreakdown, EducationLabel, ExperienceLevel, JobPosting, ResumeSignals};

pub const EXPERIENCE_EXACT: f64 = 0.10;
pub const EXPERIENCE_COMPATIBLE: f64 = 0.05;
pub const EDUCATION_MATCH: f64 = 0.05;
pub const SKILL_STEP: f64 = 0.05;
pub const SKILLS_CAP: f64 = 0.20;

/// Candidate should hold at least 80% of the required ordinal.
const COMPATIBILITY_RATIO: f64 = 0.8;

pub fn experience_compatible(candidate: ExperienceLevel, required: ExperienceLevel) -> bool {
    f64::from(candidate.ordinal()) >= f64::from(required.ordinal()) * COMPATIBILITY_RATIO
}

pub fn experience_bonus(candidate: ExperienceLevel, required: ExperienceLevel) -> f64 {
    if candidate == required {
        EXPERIENCE_EXACT
    } else if experience_compatible(candidate, required) {
        EXPERIENCE_COMPATIBLE
    } else {
        0.0
    }
}

/// Substring match of the lower-cased label in the lower-cased description.
pub fn education_bonus(education: EducationLabel, job_description: &str) -> f64 {
    let label = education.label().to_lowercase();
    if job_description.to_lowercase().contains(&label) {
        EDUCATION_MATCH
    } else {
        0.0
    }
}

/// Number of candidate skills found as substrings of the required-skills text.
pub fn matching_skill_count<S: AsRef<str>>(skills: &[S], required_skills: &str) -> usize {
    let required = required_skills.to_lowercase();
    skills
        .iter()
        .filter(|skill| required.contains(&skill.as_ref().to_lowercase()))
        .count()
}

pub fn skills_bonus_for_count(count: usize) -> f64 {
    (count as f64 * SKILL_STEP).min(SKILLS_CAP)
}

/// All three bonuses for one job. A profile without resume signals earns none.
pub fn compute_bonuses(signals: Option<&ResumeSignals>, job: &JobPosting) -> BonusBreakdown {
    let Some(signals) = signals else {
        return BonusBreakdown::default();
    };
    BonusBreakdown {
        experience: experience_bonus(signals.experience_level, job.experience_required),
        education: education_bonus(signals.education, &job.description),
        skills: skills_bonus_for_count(matching_skill_count(
            &signals.extracted_skills,
            &job.required_skills,
        )),
    }
}

/// `min(1, similarity + bonuses)`.
pub fn final_score(similarity: f64, bonuses: &BonusBreakdown) -> f64 {
    (similarity + bonuses.total()).min(1.0)
}
