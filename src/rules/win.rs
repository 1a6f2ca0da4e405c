//! Terminal-state detection for Ataxx
//!
//! The game ends when:
//! 1. A side has no pieces left (the other side wins)
//! 2. Neither side can move
//! 3. `JUMP_LIMIT` consecutive jumps were played without an extend
//! 4. Pieces fill every open square
//!
//! In cases 2-4 the side with more pieces wins; equal counts are a draw,
//! reported as `PieceColor::Empty`.

use crate::board::{Board, PieceColor, JUMP_LIMIT};

/// Compute the winner of the position, or `None` while undecided.
pub fn check_winner(board: &Board) -> Option<PieceColor> {
    let red = board.num_pieces(PieceColor::Red);
    let blue = board.num_pieces(PieceColor::Blue);

    if red == 0 {
        return Some(PieceColor::Blue);
    }
    if blue == 0 {
        return Some(PieceColor::Red);
    }

    let exhausted = board.num_jumps() >= JUMP_LIMIT
        || red + blue == board.total_open()
        || (!board.can_move(PieceColor::Red) && !board.can_move(PieceColor::Blue));

    if exhausted {
        Some(majority(red, blue))
    } else {
        None
    }
}

/// Winner by piece count, `Empty` on a tie
#[inline]
pub fn majority(red: u32, blue: u32) -> PieceColor {
    match red.cmp(&blue) {
        std::cmp::Ordering::Greater => PieceColor::Red,
        std::cmp::Ordering::Less => PieceColor::Blue,
        std::cmp::Ordering::Equal => PieceColor::Empty,
    }
}
