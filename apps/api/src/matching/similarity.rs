use crate::matching::vectorizer::SparseVector;

/// Candidates at or below this raw similarity are discarded.
pub const SIMILARITY_THRESHOLD: f64 = 0.05;

/// A job row that survived top-N selection and the similarity threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    /// Row position in the fitted corpus.
    pub index: usize,
    pub similarity: f64,
}

/// Cosine similarity clamped to [0, 1]. A zero-magnitude side yields 0.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = a.magnitude() * b.magnitude();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(0.0, 1.0)
}

/// Similarity of `profile` against every row, same length and order as `rows`.
pub fn score_all(profile: &SparseVector, rows: &[SparseVector]) -> Vec<f64> {
    rows.iter().map(|row| cosine_similarity(profile, row)).collect()
}

/// Picks the `top_n` highest scores (ties keep corpus order), then drops any
/// at or below [`SIMILARITY_THRESHOLD`]. May return fewer than `top_n`.
pub fn select_top(scores: &[f64], top_n: usize) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = scores
        .iter()
        .enumerate()
        .map(|(index, &similarity)| ScoredCandidate { index, similarity })
        .collect();
    // sort_by is stable, so equal scores stay first-seen-first.
    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    ranked.truncate(top_n);
    ranked.retain(|c| c.similarity > SIMILARITY_THRESHOLD);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_similarity_is_one() {
        let v = SparseVector::normalized(vec![(0, 2.0), (4, 1.0), (7, 0.5)]);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_orthogonal_similarity_is_zero() {
        let a = SparseVector::normalized(vec![(0, 1.0)]);
        let b = SparseVector::normalized(vec![(1, 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_zero_vector_scores_zero_everywhere() {
        let zero = SparseVector::default();
        let rows = vec![
            SparseVector::normalized(vec![(0, 1.0)]),
            SparseVector::normalized(vec![(1, 1.0)]),
        ];
        assert_eq!(score_all(&zero, &rows), vec![0.0, 0.0]);
    }

    #[test]
    fn test_select_top_orders_descending_with_stable_ties() {
        let picked = select_top(&[0.2, 0.9, 0.2, 0.5], 3);
        let indices: Vec<usize> = picked.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 3, 0]);
    }

    #[test]
    fn test_threshold_applies_after_top_n() {
        let picked = select_top(&[0.05, 0.04, 0.3, 0.06], 5);
        let indices: Vec<usize> = picked.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![2, 3]);

        // Top-2 first, so the 0.06 row is never considered.
        let picked = select_top(&[0.3, 0.5, 0.06], 2);
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|c| c.index != 2));
    }

    #[test]
    fn test_select_top_zero_returns_nothing() {
        assert!(select_top(&[0.9], 0).is_empty());
    }
}
