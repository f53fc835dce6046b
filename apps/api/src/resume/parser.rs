//! Resume parser — turns an uploaded document into `ResumeSignals`.
//!
//! A resume is optional metadata: every failure here is logged and becomes
//! `None`, never an error for the caller.

use std::path::Path;

use tracing::{debug, warn};

use crate::models::{EducationLabel, ExperienceLevel, ResumeSignals};
use crate::resume::extract::{extract_text, DocumentKind};
use crate::resume::rules::{
    experience_patterns, EDUCATION_RULES, EDUCATION_TRIGGERS, SKILL_VOCABULARY,
};

/// Vocabulary skills occurring anywhere in `text` as a substring, in
/// vocabulary order. `text` must already be lower-cased.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for skill in SKILL_VOCABULARY {
        if text.contains(skill) && !found.iter().any(|s| s == skill) {
            found.push(skill.to_string());
        }
    }
    found
}

/// Largest year count matched by any experience pattern, 0 if none.
/// Year counts are ASCII digits; counts past `u32::MAX` saturate.
pub fn extract_experience_years(text: &str) -> u32 {
    experience_patterns()
        .iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|caps| caps.get(1).map(|m| saturating_decimal(m.as_str())))
        .max()
        .unwrap_or(0)
}

fn saturating_decimal(digits: &str) -> u32 {
    digits.bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    })
}

/// Default label unless a trigger keyword appears; then the first education
/// rule with a keyword present in the text decides.
pub fn extract_education(text: &str) -> EducationLabel {
    if !EDUCATION_TRIGGERS.iter().any(|kw| text.contains(kw)) {
        return EducationLabel::default();
    }
    EDUCATION_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| text.contains(kw)))
        .map(|(_, label)| *label)
        .unwrap_or_default()
}

/// Signals from already-extracted document text. `None` for blank text.
pub fn parse_resume_text(raw: &str) -> Option<ResumeSignals> {
    if raw.trim().is_empty() {
        return None;
    }
    // Digits and punctuation stay: the experience patterns need them.
    let text = raw.to_lowercase();
    let experience_years = extract_experience_years(&text);

    Some(ResumeSignals {
        extracted_skills: extract_skills(&text),
        experience_years,
        experience_level: ExperienceLevel::from_years(experience_years),
        education: extract_education(&text),
        resume_text: text,
    })
}

pub fn parse_resume_bytes(bytes: &[u8], kind: DocumentKind) -> Option<ResumeSignals> {
    let text = match extract_text(bytes, kind) {
        Ok(text) => text,
        Err(e) => {
            warn!("Resume text extraction failed ({kind:?}): {e}");
            return None;
        }
    };
    let signals = parse_resume_text(&text);
    if let Some(s) = &signals {
        debug!(
            skills = s.extracted_skills.len(),
            years = s.experience_years,
            education = %s.education,
            "Parsed resume"
        );
    } else {
        debug!("Resume yielded no text ({kind:?})");
    }
    signals
}

/// Reads and parses a stored upload. The kind comes from the file extension;
/// unsupported extensions yield `None`.
pub fn parse_resume_file(path: &Path) -> Option<ResumeSignals> {
    let Some(kind) = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(DocumentKind::from_extension)
    else {
        warn!("Unsupported resume file type: {}", path.display());
        return None;
    };
    match std::fs::read(path) {
        Ok(bytes) => parse_resume_bytes(&bytes, kind),
        Err(e) => {
            warn!("Failed to read resume {}: {e}", path.display());
            None
        }
    }
}
