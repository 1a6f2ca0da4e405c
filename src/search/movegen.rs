//! Legal move enumeration
//!
//! Sources are visited by column then row, and for each source the
//! destinations within two columns and rows likewise. The order is part of
//! the search contract: ties keep the first move found.

use crate::board::{Board, Square, BOARD_SIZE};
use crate::moves::Move;

/// All legal moves for the side to move, or exactly `[Move::Pass]` if none.
pub fn enumerate_moves(board: &Board) -> Vec<Move> {
    let mover = board.whose_move();
    let mut moves = Vec::with_capacity(64);

    for from in Square::all().filter(|&sq| board.get(sq) == mover) {
        for col in reach(from.col) {
            for row in reach(from.row) {
                let mv = Move::step(from, Square::new(col, row));
                if board.legal_move(mv) {
                    moves.push(mv);
                }
            }
        }
    }

    if moves.is_empty() {
        moves.push(Move::Pass);
    }
    moves
}

/// Coordinates within two of `c`, clipped to the board
#[inline]
fn reach(c: u8) -> std::ops::RangeInclusive<u8> {
    c.saturating_sub(2)..=(c + 2).min(BOARD_SIZE as u8 - 1)
}
