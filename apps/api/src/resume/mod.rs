// Resume parsing: document text extraction and heuristic signal extraction.

pub mod extract;
pub mod handlers;
pub mod parser;
pub mod rules;

pub use extract::DocumentKind;
pub use parser::{parse_resume_bytes, parse_resume_file, parse_resume_text};
