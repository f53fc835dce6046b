// Recommendation core: normalization, TF-IDF, cosine similarity, bonuses, ranking.

pub mod bonus;
pub mod engine;
pub mod handlers;
pub mod normalizer;
pub mod similarity;
pub mod stop_words;
pub mod vectorizer;

pub use engine::{CorpusIndex, JobCatalog, RecommendationEngine, DEFAULT_TOP_N};
