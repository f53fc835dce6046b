//! Fixed heuristic tables for resume signal extraction. Order is significant
//! everywhere in this file.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::EducationLabel;

/// Curated skill vocabulary. Extracted skills are reported in this order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python", "javascript", "java", "react", "angular", "vue", "node.js", "django", "flask",
    "sql", "postgresql", "mysql", "mongodb", "aws", "azure", "docker", "kubernetes",
    "git", "github", "machine learning", "ai", "data science", "pandas", "numpy",
    "html", "css", "bootstrap", "jquery", "php", "laravel", "spring", "express",
    "typescript", "c++", "c#", ".net", "ruby", "rails", "go", "rust", "swift",
    "android", "ios", "react native", "flutter", "xamarin", "unity", "unreal",
    "photoshop", "illustrator", "figma", "sketch", "adobe", "ui/ux", "design",
    "project management", "agile", "scrum", "devops", "ci/cd", "jenkins",
    "linux", "windows", "macos", "api", "rest", "graphql", "microservices",
];

/// "N(+) year(s) ..." patterns, most specific first. Every match of every
/// pattern is a candidate; the maximum wins.
pub fn experience_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"([0-9]+)\+?\s*years?\s*(?:of\s*)?experience",
            r"([0-9]+)\+?\s*years?\s*(?:in\s*)?",
            r"([0-9]+)\+?\s*years?\s*(?:of\s*)?",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("static experience pattern is valid"))
        .collect()
    })
}

/// Any of these gates education classification; otherwise the default label stands.
pub const EDUCATION_TRIGGERS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "diploma",
    "certification",
];

/// Evaluated top to bottom once a trigger is present; the first rule with a
/// matching keyword decides the label.
pub const EDUCATION_RULES: &[(&[&str], EducationLabel)] = &[
    (&["master", "mba"], EducationLabel::Masters),
    (&["phd", "doctorate"], EducationLabel::Phd),
    (&["diploma"], EducationLabel::Diploma),
];
