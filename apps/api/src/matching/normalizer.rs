//! Deterministic text cleaning shared by the resume parser and the vectorizer.

use std::sync::OnceLock;

use regex::Regex;

/// Unicode decimal digits (`Nd`). Vulgar fractions and Roman numerals are not.
fn decimal_digit() -> &'static Regex {
    static DIGIT: OnceLock<Regex> = OnceLock::new();
    DIGIT.get_or_init(|| Regex::new(r"\d").expect("static digit pattern is valid"))
}

/// Lower-cases, then drops every decimal digit and ASCII punctuation character.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    decimal_digit()
        .replace_all(&lowered, "")
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}
