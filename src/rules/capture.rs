//! Flood-convert capture rule for Ataxx
//!
//! After a piece lands, every opponent piece in the 8-neighborhood of the
//! destination flips to the mover's color. The padded border means the
//! neighborhood never leaves the buffer.

use crate::board::{neighbor, Board, PieceColor, Square};

/// Offsets of the 8-neighborhood (the center is included but can never
/// hold an opponent piece once the mover has landed there)
const NEIGHBORHOOD: [(isize, isize); 9] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 0), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// Count opponent pieces that a piece of `mover` landing on `dest` would flip.
///
/// Pure query; does not touch the board.
pub fn count_captures(board: &Board, dest: Square, mover: PieceColor) -> u8 {
    let center = dest.padded_index();
    let opponent = mover.opposite();
    NEIGHBORHOOD
        .iter()
        .filter(|&&(dc, dr)| board.cell(neighbor(center, dc, dr)) == opponent)
        .count() as u8
}

/// Flip every opponent piece adjacent to `dest` to `mover`, recording each
/// change in the current undo frame and adjusting piece counts.
///
/// # Returns
/// Number of pieces converted
pub(crate) fn flood_convert(board: &mut Board, dest: Square, mover: PieceColor) -> u8 {
    let center = dest.padded_index();
    let opponent = mover.opposite();
    let mut flipped = 0u8;

    for &(dc, dr) in &NEIGHBORHOOD {
        let idx = neighbor(center, dc, dr);
        if board.cell(idx) == opponent {
            board.record_set(idx, mover);
            flipped += 1;
        }
    }

    board.adjust_pieces(mover, flipped as i32);
    board.adjust_pieces(opponent, -(flipped as i32));
    flipped
}
