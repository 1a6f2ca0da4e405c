//! Static evaluation for Ataxx positions
//!
//! Decided positions score as a win, loss or draw. Everything else is the
//! plain material difference; there is no positional weighting.

use crate::board::{Board, PieceColor};

use super::score::Score;

/// Evaluate `board` from red's point of view.
///
/// # Arguments
/// * `board` - The position to score
/// * `winning_value` - Magnitude returned for a decided game, normally
///   `Score::win_at(remaining_depth)`
///
/// # Returns
/// `+winning_value` for a red win, `-winning_value` for a blue win, `0` for
/// a draw, otherwise red pieces minus blue pieces.
#[must_use]
pub fn static_score(board: &Board, winning_value: i32) -> i32 {
    match board.winner() {
        Some(PieceColor::Red) => winning_value,
        Some(PieceColor::Blue) => -winning_value,
        Some(_) => Score::DRAW,
        None => board.red_pieces() as i32 - board.blue_pieces() as i32,
    }
}
