//! Job recommendation core: resume parsing, TF-IDF matching and ranking,
//! plus the thin HTTP shell that wires them to collaborators.

pub mod config;
pub mod errors;
pub mod jobs;
pub mod matching;
pub mod models;
pub mod resume;
pub mod routes;
pub mod state;
