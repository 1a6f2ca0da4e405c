//! Evaluation module for Ataxx positions
//!
//! Scores are red-positive. A decided game scores a depth-adjusted win
//! sentinel; an open game scores its material difference.

pub mod heuristic;
pub mod score;

pub use heuristic::static_score;
pub use score::Score;
