// In-memory job board standing in for the storage layer.

pub mod board;
pub mod handlers;

pub use board::JobBoard;
