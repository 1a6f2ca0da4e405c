//! Score sentinels for Ataxx evaluation
//!
//! Scores are from red's point of view: positive favours red, negative
//! favours blue. Material differences stay far below both sentinels.

/// Score constants
pub struct Score;

impl Score {
    /// Base magnitude of a decided game. The search adds the remaining
    /// depth so quicker wins outrank slower ones.
    pub const WIN: i32 = i32::MAX - 20;

    /// Alpha-beta window bound, strictly above any win score
    pub const INFINITY: i32 = i32::MAX;

    /// Drawn game
    pub const DRAW: i32 = 0;

    /// Win score for a node with `depth` plies left
    #[inline]
    pub const fn win_at(depth: u8) -> i32 {
        Self::WIN + depth as i32
    }
}
