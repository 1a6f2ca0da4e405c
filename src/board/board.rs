//! Board state machine with undo tracking

use std::fmt::{self, Write as _};

use log::{debug, trace};

use super::undo::UndoLog;
use super::{neighbor, PieceColor, Square, BOARD_SIZE, EXTENDED_CELLS, EXTENDED_SIZE};
use crate::error::{AtaxxResult, GameError};
use crate::moves::Move;
use crate::rules;

/// Callback invoked after every committed state change
pub type Notifier = Box<dyn FnMut(&Board) + Send>;

/// Game board.
///
/// The 7x7 playing area sits inside an 11x11 buffer whose outer two rings
/// are permanently `Blocked`, so any square within two rows and columns of
/// a playable square is a valid buffer index and off-board targets look
/// like blocks.
pub struct Board {
    cells: [PieceColor; EXTENDED_CELLS],
    /// Piece counts, indexed by `PieceColor::slot`
    num_pieces: [u32; 2],
    whose_move: PieceColor,
    /// Moves and passes since the last clear
    num_moves: u32,
    /// Consecutive jumps since the last extend or clear
    num_jumps: u32,
    /// `Some(Empty)` for a draw
    winner: Option<PieceColor>,
    move_log: Vec<Move>,
    undo_log: UndoLog,
    notifier: Option<Notifier>,
}

impl Board {
    /// A cleared board in the starting position
    pub fn new() -> Self {
        let mut board = Self {
            cells: [PieceColor::Blocked; EXTENDED_CELLS],
            num_pieces: [0; 2],
            whose_move: PieceColor::Red,
            num_moves: 0,
            num_jumps: 0,
            winner: None,
            move_log: Vec::with_capacity(128),
            undo_log: UndoLog::new(),
            notifier: None,
        };
        board.clear();
        board
    }

    /// Copy of `other`'s layout and counters with an empty history and no
    /// notifier. Used by the search to get a private scratch board.
    pub fn from_board(other: &Board) -> Self {
        let mut board = Self {
            cells: other.cells,
            num_pieces: other.num_pieces,
            whose_move: other.whose_move,
            num_moves: 0,
            num_jumps: other.num_jumps,
            winner: None,
            move_log: Vec::with_capacity(64),
            undo_log: UndoLog::new(),
            notifier: None,
        };
        board.winner = rules::check_winner(&board);
        board
    }

    /// Reset to the starting position: red on a7 and g1, blue on a1 and g7,
    /// no blocks, red to move.
    pub fn clear(&mut self) {
        self.cells = [PieceColor::Blocked; EXTENDED_CELLS];
        for sq in Square::all() {
            self.cells[sq.padded_index()] = PieceColor::Empty;
        }
        self.num_pieces = [0; 2];
        for (name, color) in [
            (('a', '7'), PieceColor::Red),
            (('g', '1'), PieceColor::Red),
            (('a', '1'), PieceColor::Blue),
            (('g', '7'), PieceColor::Blue),
        ] {
            if let Some(sq) = Square::from_chars(name.0, name.1) {
                self.cells[sq.padded_index()] = color;
                self.adjust_pieces(color, 1);
            }
        }
        self.whose_move = PieceColor::Red;
        self.num_moves = 0;
        self.num_jumps = 0;
        self.move_log.clear();
        self.undo_log.clear();
        self.winner = rules::check_winner(self);
        debug!("board cleared");
        self.announce();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Contents of `sq`. Squares outside the playable region read as blocked.
    #[inline]
    pub fn get(&self, sq: Square) -> PieceColor {
        if sq.is_on_board() {
            self.cells[sq.padded_index()]
        } else {
            PieceColor::Blocked
        }
    }

    /// Contents of the square with playable index `idx` (0..49, row-major)
    #[inline]
    pub fn get_index(&self, idx: usize) -> PieceColor {
        debug_assert!(idx < BOARD_SIZE * BOARD_SIZE);
        self.get(Square::from_index(idx))
    }

    /// Raw buffer read, border included
    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> PieceColor {
        self.cells[idx]
    }

    #[inline]
    pub fn num_pieces(&self, color: PieceColor) -> u32 {
        color.slot().map_or(0, |s| self.num_pieces[s])
    }

    #[inline]
    pub fn red_pieces(&self) -> u32 {
        self.num_pieces(PieceColor::Red)
    }

    #[inline]
    pub fn blue_pieces(&self) -> u32 {
        self.num_pieces(PieceColor::Blue)
    }

    /// Color to move next. Arbitrary once the game is over.
    #[inline]
    pub fn whose_move(&self) -> PieceColor {
        self.whose_move
    }

    #[inline]
    pub fn num_moves(&self) -> u32 {
        self.num_moves
    }

    #[inline]
    pub fn num_jumps(&self) -> u32 {
        self.num_jumps
    }

    /// Winner once decided; `Some(Empty)` is a draw
    #[inline]
    pub fn winner(&self) -> Option<PieceColor> {
        self.winner
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Moves and passes applied since the last clear
    pub fn all_moves(&self) -> &[Move] {
        &self.move_log
    }

    /// Number of playable squares that are not blocked
    pub fn total_open(&self) -> u32 {
        Square::all()
            .filter(|&sq| self.cells[sq.padded_index()] != PieceColor::Blocked)
            .count() as u32
    }

    /// True iff `who` has a piece with an empty square within two rows and
    /// columns, regardless of whose turn it is.
    pub fn can_move(&self, who: PieceColor) -> bool {
        if !who.is_piece() {
            return false;
        }
        Square::all()
            .map(Square::padded_index)
            .filter(|&idx| self.cells[idx] == who)
            .any(|idx| {
                (-2..=2).any(|dc| {
                    (-2..=2).any(|dr| self.cells[neighbor(idx, dc, dr)] == PieceColor::Empty)
                })
            })
    }

    /// True iff `mv` may be played now.
    ///
    /// A pass is legal only when the side to move has pieces but no move.
    /// A step needs both endpoints on the board, at most two rows and
    /// columns apart, the mover's piece at the source and an empty
    /// destination. Nothing is legal once the game is decided.
    pub fn legal_move(&self, mv: Move) -> bool {
        if self.winner.is_some() {
            return false;
        }
        match mv {
            Move::Pass => {
                self.num_pieces(self.whose_move) > 0 && !self.can_move(self.whose_move)
            }
            Move::Step { from, to } => {
                from.is_on_board()
                    && to.is_on_board()
                    && from.distance(to) <= 2
                    && self.get(from) == self.whose_move
                    && self.get(to) == PieceColor::Empty
            }
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Apply `mv`, flipping adjacent opponent pieces.
    ///
    /// # Errors
    /// `GameError::IllegalMove` if `!self.legal_move(mv)`
    pub fn make_move(&mut self, mv: Move) -> AtaxxResult<()> {
        if !self.legal_move(mv) {
            return Err(GameError::IllegalMove(mv));
        }
        let (from, to) = match mv {
            Move::Pass => return self.pass(),
            Move::Step { from, to } => (from, to),
        };

        let mover = self.whose_move;
        self.move_log.push(mv);
        self.undo_log.start_frame(self.num_jumps);

        if mv.is_extend() {
            self.record_set(to.padded_index(), mover);
            self.adjust_pieces(mover, 1);
            self.num_jumps = 0;
        } else {
            self.record_set(from.padded_index(), PieceColor::Empty);
            self.record_set(to.padded_index(), mover);
            self.num_jumps += 1;
        }

        let flipped = rules::flood_convert(self, to, mover);

        self.winner = rules::check_winner(self);
        self.num_moves += 1;
        self.whose_move = mover.opposite();
        trace!("{mover} played {mv}, {flipped} converted");
        self.announce();
        Ok(())
    }

    /// Apply move text of the form `c0r0-c1r1`, or `-` for a pass.
    pub fn make_move_str(&mut self, text: &str) -> AtaxxResult<()> {
        self.make_move(text.parse()?)
    }

    /// Pass the turn. Never changes pieces or the jump counter.
    ///
    /// # Errors
    /// - `GameError::IllegalMove` once the game is decided
    /// - `GameError::PassWithLegalMove` if the side to move can move
    pub fn pass(&mut self) -> AtaxxResult<()> {
        if self.winner.is_some() {
            return Err(GameError::IllegalMove(Move::Pass));
        }
        if self.can_move(self.whose_move) {
            return Err(GameError::PassWithLegalMove);
        }
        self.move_log.push(Move::Pass);
        self.undo_log.start_frame(self.num_jumps);
        self.num_moves += 1;
        self.whose_move = self.whose_move.opposite();
        self.winner = rules::check_winner(self);
        trace!("{} passed", self.whose_move.opposite());
        self.announce();
        Ok(())
    }

    /// Take back the last move or pass.
    ///
    /// # Errors
    /// - `GameError::NothingToUndo` on a board with no applied moves
    /// - `GameError::UndoLogMismatch` if the undo log lost step with the
    ///   move log (internal corruption)
    pub fn undo(&mut self) -> AtaxxResult<()> {
        let last = *self.move_log.last().ok_or(GameError::NothingToUndo)?;
        if self.undo_log.depth() != self.move_log.len() {
            return Err(GameError::UndoLogMismatch {
                frames: self.undo_log.depth(),
                moves: self.move_log.len(),
            });
        }

        self.move_log.pop();
        self.num_moves -= 1;
        self.whose_move = self.whose_move.opposite();

        let cells = &mut self.cells;
        let counts = &mut self.num_pieces;
        let prior_jumps = self.undo_log.pop_frame(|idx, prior| {
            if let Some(s) = cells[idx].slot() {
                counts[s] -= 1;
            }
            if let Some(s) = prior.slot() {
                counts[s] += 1;
            }
            cells[idx] = prior;
        });
        // A jump undone leaves one fewer; an extend undone restores the run
        // it had reset.
        self.num_jumps = prior_jumps.ok_or(GameError::UndoLogMismatch {
            frames: self.undo_log.depth(),
            moves: self.move_log.len() + 1,
        })?;

        self.winner = rules::check_winner(self);
        trace!("undid {last}");
        self.announce();
        Ok(())
    }

    /// Apply `mv`, run `f` on the resulting position, then undo, so the
    /// board is restored on every path out of `f` (including errors).
    pub fn scoped_move<T>(
        &mut self,
        mv: Move,
        f: impl FnOnce(&mut Board) -> AtaxxResult<T>,
    ) -> AtaxxResult<T> {
        self.make_move(mv)?;
        let result = f(self);
        self.undo()?;
        result
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// True iff a block may be placed at `sq`: play has not started, `sq` is
    /// empty and none of its mirror squares holds a piece.
    pub fn legal_block(&self, sq: Square) -> bool {
        sq.is_on_board()
            && self.move_log.is_empty()
            && self.get(sq) == PieceColor::Empty
            && rules::mirror_squares(sq)
                .iter()
                .all(|&m| !self.get(m).is_piece())
    }

    pub fn legal_block_str(&self, text: &str) -> bool {
        text.parse().map_or(false, |sq| self.legal_block(sq))
    }

    /// Block `sq` and its reflections across the middle row and column.
    /// A setup that leaves neither side a move is an immediate draw.
    ///
    /// # Errors
    /// `GameError::IllegalBlock` if `!self.legal_block(sq)`
    pub fn set_block(&mut self, sq: Square) -> AtaxxResult<()> {
        if !self.legal_block(sq) {
            return Err(GameError::IllegalBlock(sq));
        }
        for m in rules::mirror_squares(sq) {
            self.cells[m.padded_index()] = PieceColor::Blocked;
        }
        self.winner = if !self.can_move(PieceColor::Red) && !self.can_move(PieceColor::Blue) {
            Some(PieceColor::Empty)
        } else {
            rules::check_winner(self)
        };
        debug!("block placed at {sq}");
        self.announce();
        Ok(())
    }

    pub fn set_block_str(&mut self, text: &str) -> AtaxxResult<()> {
        self.set_block(text.parse()?)
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Undoable write: logs the prior contents in the open frame
    #[inline]
    pub(crate) fn record_set(&mut self, idx: usize, color: PieceColor) {
        self.undo_log.record(idx, self.cells[idx]);
        self.cells[idx] = color;
    }

    #[inline]
    pub(crate) fn adjust_pieces(&mut self, color: PieceColor, delta: i32) {
        if let Some(s) = color.slot() {
            self.num_pieces[s] = self.num_pieces[s].saturating_add_signed(delta);
        }
    }

    /// Unrecorded write for test setups. Keeps counts and status in sync.
    #[cfg(test)]
    pub(crate) fn put(&mut self, sq: Square, color: PieceColor) {
        let idx = sq.padded_index();
        self.adjust_pieces(self.cells[idx], -1);
        self.adjust_pieces(color, 1);
        self.cells[idx] = color;
        self.winner = rules::check_winner(self);
    }

    // =========================================================================
    // Notification and rendering
    // =========================================================================

    /// Install `notify`, called after every committed change. Fires once
    /// immediately.
    pub fn set_notifier(&mut self, notify: impl FnMut(&Board) + Send + 'static) {
        self.notifier = Some(Box::new(notify));
        self.announce();
    }

    /// Remove the notifier (back to no-op)
    pub fn clear_notifier(&mut self) {
        self.notifier = None;
    }

    fn announce(&mut self) {
        if let Some(mut notify) = self.notifier.take() {
            notify(self);
            self.notifier = Some(notify);
        }
    }

    /// Text depiction, row 7 at the top. With `legend`, rows are prefixed
    /// with their digit and a column header closes the picture.
    pub fn to_string_with_legend(&self, legend: bool) -> String {
        let mut out = String::with_capacity(EXTENDED_SIZE * 2 * BOARD_SIZE);
        for row in (0..BOARD_SIZE as u8).rev() {
            if legend {
                out.push((b'1' + row) as char);
            }
            out.push(' ');
            for col in 0..BOARD_SIZE as u8 {
                let _ = write!(out, " {}", self.get(Square::new(col, row)).symbol());
            }
            out.push('\n');
        }
        if legend {
            out.push_str("   a b c d e f g");
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    /// Boards are equal when their square contents are.
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_legend(false))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("whose_move", &self.whose_move)
            .field("red", &self.red_pieces())
            .field("blue", &self.blue_pieces())
            .field("num_moves", &self.num_moves)
            .field("num_jumps", &self.num_jumps)
            .field("winner", &self.winner)
            .field("moves", &self.move_log)
            .finish_non_exhaustive()
    }
}
