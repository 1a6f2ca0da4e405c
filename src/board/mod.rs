//! Board representation for Ataxx

pub mod board;
pub mod undo;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use crate::error::{AtaxxResult, GameError};

// Re-exports
pub use board::Board;
pub use undo::UndoLog;

/// Board size (7x7)
pub const BOARD_SIZE: usize = 7;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 49

/// Width of the permanently blocked border on each side
pub const BORDER: usize = 2;

/// Side of the padded buffer (7 + 2 * 2 = 11)
pub const EXTENDED_SIZE: usize = BOARD_SIZE + 2 * BORDER;
pub const EXTENDED_CELLS: usize = EXTENDED_SIZE * EXTENDED_SIZE; // 121

/// Consecutive jumps without an extend that end the game
pub const JUMP_LIMIT: u32 = 25;

/// Contents of a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Empty,
    Blocked,
    Red,
    Blue,
}

impl PieceColor {
    /// Get opponent color
    #[inline]
    pub fn opposite(self) -> PieceColor {
        match self {
            PieceColor::Red => PieceColor::Blue,
            PieceColor::Blue => PieceColor::Red,
            other => other,
        }
    }

    /// True for the two playing colors
    #[inline]
    pub fn is_piece(self) -> bool {
        matches!(self, PieceColor::Red | PieceColor::Blue)
    }

    /// Slot in per-color counters (Red = 0, Blue = 1)
    #[inline]
    pub(crate) fn slot(self) -> Option<usize> {
        match self {
            PieceColor::Red => Some(0),
            PieceColor::Blue => Some(1),
            _ => None,
        }
    }

    /// Single-character cell symbol used by the text rendering
    pub fn symbol(self) -> char {
        match self {
            PieceColor::Red => 'r',
            PieceColor::Blue => 'b',
            PieceColor::Blocked => 'X',
            PieceColor::Empty => '-',
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceColor::Red => "Red",
            PieceColor::Blue => "Blue",
            PieceColor::Blocked => "Blocked",
            PieceColor::Empty => "Empty",
        };
        f.write_str(name)
    }
}

impl FromStr for PieceColor {
    type Err = GameError;

    /// Parses `red` / `blue` in any case.
    fn from_str(s: &str) -> AtaxxResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(PieceColor::Red),
            "blue" | "b" => Ok(PieceColor::Blue),
            _ => Err(GameError::InvalidColor(s.to_string())),
        }
    }
}

/// Square on the playable board. `col` 0..7 maps to 'a'..'g', `row` 0..7
/// maps to '1'..'7'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub col: u8,
    pub row: u8,
}

impl Square {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < BOARD_SIZE as u8 && row < BOARD_SIZE as u8);
        Self { col, row }
    }

    /// Square named by column letter and row digit, e.g. `('c', '3')`
    pub fn from_chars(col: char, row: char) -> Option<Self> {
        if !('a'..='g').contains(&col) || !('1'..='7').contains(&row) {
            return None;
        }
        Some(Self {
            col: col as u8 - b'a',
            row: row as u8 - b'1',
        })
    }

    /// True iff the square lies within the 7x7 playable region
    #[inline]
    pub fn is_on_board(self) -> bool {
        (self.col as usize) < BOARD_SIZE && (self.row as usize) < BOARD_SIZE
    }

    /// Playable-region index in row-major order (0..49)
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            col: (idx % BOARD_SIZE) as u8,
            row: (idx / BOARD_SIZE) as u8,
        }
    }

    /// Index into the padded buffer. Only meaningful for on-board squares.
    #[inline]
    pub(crate) fn padded_index(self) -> usize {
        (self.row as usize + BORDER) * EXTENDED_SIZE + (self.col as usize + BORDER)
    }

    /// Chebyshev distance between two squares
    #[inline]
    pub fn distance(self, other: Square) -> u8 {
        self.col.abs_diff(other.col).max(self.row.abs_diff(other.row))
    }

    /// Column letter; off-board columns map to `'?'`
    pub fn col_char(self) -> char {
        if (self.col as usize) < BOARD_SIZE {
            (b'a' + self.col) as char
        } else {
            '?'
        }
    }

    /// Row digit; off-board rows map to `'?'`
    pub fn row_char(self) -> char {
        if (self.row as usize) < BOARD_SIZE {
            (b'1' + self.row) as char
        } else {
            '?'
        }
    }

    /// Iterate over all playable squares, column-major (a1, a2, .., g7)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|col| (0..BOARD_SIZE as u8).map(move |row| Square { col, row }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", self.col_char(), self.row_char())
        } else {
            write!(f, "({},{})", self.col, self.row)
        }
    }
}

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> AtaxxResult<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(r), None) => {
                Square::from_chars(c, r).ok_or_else(|| GameError::InvalidSquareText(s.to_string()))
            }
            _ => Err(GameError::InvalidSquareText(s.to_string())),
        }
    }
}

/// Padded-buffer index of the square `dc` columns and `dr` rows from `idx`
#[inline]
pub(crate) fn neighbor(idx: usize, dc: isize, dr: isize) -> usize {
    (idx as isize + dc + dr * EXTENDED_SIZE as isize) as usize
}
