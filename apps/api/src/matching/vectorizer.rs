//! TF-IDF vectorizer fitted over the job corpus.
//!
//! Tokens are runs of two or more word characters taken from normalized text,
//! English stop words are dropped, and the vocabulary keeps the
//! `max_features` terms with the highest corpus-wide counts. Weights are raw
//! term counts times a smoothed IDF, `ln((1 + n) / (1 + df)) + 1`, and every
//! vector is L2-normalized.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::AppError;
use crate::matching::normalizer::normalize;
use crate::matching::stop_words::is_english_stop_word;

/// Upper bound on vocabulary size.
pub const MAX_FEATURES: usize = 1000;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("static token pattern is valid"))
}

/// Splits normalized text into vocabulary candidates.
fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    token_pattern()
        .find_iter(&normalized)
        .map(|m| m.as_str())
        .filter(|token| !is_english_stop_word(token))
        .map(String::from)
        .collect()
}

/// Sparse vector over vocabulary indices, entries sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds an L2-normalized vector. Indices may arrive in any order.
    pub fn normalized(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|(_, w)| *w != 0.0);
        entries.sort_by_key(|(idx, _)| *idx);
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in entries.iter_mut() {
                *w /= norm;
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(idx, _)| *idx)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn magnitude(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Merge-join dot product over the sorted index lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Vocabulary and IDF weights learned by `fit`.
#[derive(Debug, Clone)]
struct FittedModel {
    /// term -> column index; columns are assigned in alphabetical order.
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl FittedModel {
    fn vectorize(&self, tokens: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }
        SparseVector::normalized(
            counts
                .into_iter()
                .map(|(idx, tf)| (idx, tf * self.idf[idx]))
                .collect(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct TextVectorizer {
    max_features: usize,
    model: Option<FittedModel>,
}

impl Default for TextVectorizer {
    fn default() -> Self {
        Self::new(MAX_FEATURES)
    }
}

impl TextVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            model: None,
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.model.as_ref().map_or(0, |m| m.vocabulary.len())
    }

    /// Column index of `term`, if it survived vocabulary selection.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.model.as_ref()?.vocabulary.get(term).copied()
    }

    /// Learns vocabulary and IDF from `corpus`, replacing any earlier fit, and
    /// returns one vector per document in corpus order.
    pub fn fit<S: AsRef<str>>(&mut self, corpus: &[S]) -> Vec<SparseVector> {
        let documents: Vec<Vec<String>> = corpus.iter().map(|d| tokenize(d.as_ref())).collect();

        let mut term_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &documents {
            let mut seen: Vec<&str> = Vec::new();
            for token in tokens {
                *term_counts.entry(token.as_str()).or_insert(0) += 1;
                seen.push(token.as_str());
            }
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Highest corpus counts first, alphabetical among equals.
        let mut ranked: Vec<(&str, usize)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut kept: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        kept.sort_unstable();

        let n_docs = documents.len() as f64;
        let idf = kept
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();
        let vocabulary = kept
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        let model = FittedModel { vocabulary, idf };
        let vectors = documents.iter().map(|tokens| model.vectorize(tokens)).collect();
        self.model = Some(model);
        vectors
    }

    /// Projects `text` into the fitted space. Terms unseen at fit time are ignored.
    pub fn transform(&self, text: &str) -> Result<SparseVector, AppError> {
        let model = self.model.as_ref().ok_or_else(|| {
            AppError::InvalidState("vectorizer transform called before fit".to_string())
        })?;
        Ok(model.vectorize(&tokenize(text)))
    }
}
