//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreResult, score_codes};
pub use simple::{SimpleCommand, run_simple};
