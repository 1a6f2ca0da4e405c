//! Search module for the Ataxx AI
//!
//! Contains:
//! - Move enumeration in a fixed, deterministic order
//! - Fixed-depth minimax with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{sense_of, SearchResult, Searcher, MAX_DEPTH};
pub use movegen::enumerate_moves;
