//! Game rules for Ataxx
//!
//! This module implements the rule pieces shared by the board and search:
//! - Flood-convert capture around a move's destination
//! - Terminal-state detection (wipeout, no moves, jump limit, full board)
//! - Mirrored block placement

pub mod blocks;
pub mod capture;
pub mod win;

// Re-exports for convenient access
pub use blocks::mirror_squares;
pub use capture::count_captures;
pub(crate) use capture::flood_convert;
pub use win::{check_winner, majority};
