//! Block placement symmetry
//!
//! A block placed on one square is mirrored across the middle row (4)
//! and the middle column (d), so every setup stays four-fold symmetric.

use crate::board::{Square, BOARD_SIZE};

/// The square and its reflections across the center row and column.
///
/// Squares on a center line repeat; callers setting all four squares
/// get the deduplication for free.
pub fn mirror_squares(sq: Square) -> [Square; 4] {
    let last = BOARD_SIZE as u8 - 1;
    let col = last - sq.col;
    let row = last - sq.row;
    [
        sq,
        Square::new(col, sq.row),
        Square::new(sq.col, row),
        Square::new(col, row),
    ]
}
