//! Move value type and its text form
//!
//! A move is either a pass (`-`) or a step from one square to another
//! (`a7-b6`). Steps to an adjacent square are *extends* and leave the
//! source occupied; longer steps are *jumps* and relocate the piece.

use std::fmt;
use std::str::FromStr;

use crate::board::Square;
use crate::error::{AtaxxResult, GameError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Pass,
    Step { from: Square, to: Square },
}

impl Move {
    #[inline]
    pub fn step(from: Square, to: Square) -> Self {
        Move::Step { from, to }
    }

    /// Build a step from column letters and row digits, e.g.
    /// `Move::from_chars('a', '7', 'b', '6')`.
    pub fn from_chars(c0: char, r0: char, c1: char, r1: char) -> Option<Self> {
        Some(Move::Step {
            from: Square::from_chars(c0, r0)?,
            to: Square::from_chars(c1, r1)?,
        })
    }

    #[inline]
    pub fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }

    /// Destination adjacent to source (Chebyshev distance 1)
    #[inline]
    pub fn is_extend(self) -> bool {
        match self {
            Move::Step { from, to } => from.distance(to) <= 1,
            Move::Pass => false,
        }
    }

    #[inline]
    pub fn is_jump(self) -> bool {
        match self {
            Move::Step { from, to } => from.distance(to) > 1,
            Move::Pass => false,
        }
    }

    pub fn from(self) -> Option<Square> {
        match self {
            Move::Step { from, .. } => Some(from),
            Move::Pass => None,
        }
    }

    pub fn to(self) -> Option<Square> {
        match self {
            Move::Step { to, .. } => Some(to),
            Move::Pass => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pass => f.write_str("-"),
            Move::Step { from, to } => write!(f, "{from}-{to}"),
        }
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> AtaxxResult<Self> {
        let text = s.trim();
        if text == "-" {
            return Ok(Move::Pass);
        }
        let chars: Vec<char> = text.chars().collect();
        match chars.as_slice() {
            [c0, r0, '-', c1, r1] => Move::from_chars(*c0, *r0, *c1, *r1)
                .ok_or_else(|| GameError::InvalidMoveText(s.to_string())),
            _ => Err(GameError::InvalidMoveText(s.to_string())),
        }
    }
}
