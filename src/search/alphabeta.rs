//! Fixed-depth minimax with alpha-beta pruning
//!
//! The search works on one private scratch board for the whole tree:
//! every child is reached by applying a move and left by undoing it
//! (`Board::scoped_move`), never by copying.
//!
//! Scores are red-positive. `sense` is `+1` at nodes where red picks the
//! maximum and `-1` where blue picks the minimum. A child only replaces
//! the running best on strict improvement, so equal scores keep the move
//! enumerated first.
//!
//! # Example
//!
//! ```
//! use ataxx::board::Board;
//! use ataxx::search::Searcher;
//!
//! let board = Board::new();
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, 2).unwrap();
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, PieceColor};
use crate::error::AtaxxResult;
use crate::eval::{static_score, Score};
use crate::moves::Move;

use super::movegen::enumerate_moves;

/// Default search depth in plies
pub const MAX_DEPTH: u8 = 4;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move at the root; `None` if the root position was decided
    pub best_move: Option<Move>,
    /// Minimax value of the root, red-positive
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Nodes visited (including the root)
    pub nodes: u64,
}

/// Sign convention for the side choosing at a node
#[inline]
pub fn sense_of(color: PieceColor) -> i32 {
    if color == PieceColor::Red {
        1
    } else {
        -1
    }
}

/// Minimax searcher. Holds per-search statistics only.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    found: Option<Move>,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `board` to `depth` plies for the side to move.
    ///
    /// The live board is never touched; a scratch copy is searched.
    pub fn search(&mut self, board: &Board, depth: u8) -> AtaxxResult<SearchResult> {
        self.search_as(board, board.whose_move(), depth)
    }

    /// Search with the sense of `color`, which should be the side to move.
    pub fn search_as(
        &mut self,
        board: &Board,
        color: PieceColor,
        depth: u8,
    ) -> AtaxxResult<SearchResult> {
        debug_assert_eq!(color, board.whose_move());
        self.nodes = 0;
        self.found = None;

        let mut scratch = Board::from_board(board);
        let score = self.minimax(
            &mut scratch,
            depth,
            true,
            sense_of(color),
            -Score::INFINITY,
            Score::INFINITY,
        )?;

        Ok(SearchResult {
            best_move: self.found,
            score,
            depth,
            nodes: self.nodes,
        })
    }

    /// Value of `board` searched `depth` plies deep, recording the best move
    /// in `self.found` iff `save_move`. Decided positions and depth 0 return
    /// the static score without recording anything.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        save_move: bool,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> AtaxxResult<i32> {
        self.nodes += 1;

        if depth == 0 || board.is_game_over() {
            return Ok(static_score(board, Score::win_at(depth)));
        }

        let mut best = None;
        let mut best_score = if sense == 1 {
            -Score::INFINITY
        } else {
            Score::INFINITY
        };

        for mv in enumerate_moves(board) {
            let response = board.scoped_move(mv, |child| {
                self.minimax(child, depth - 1, false, -sense, alpha, beta)
            })?;

            let improved = if sense == 1 {
                response > best_score
            } else {
                response < best_score
            };
            if !improved {
                continue;
            }

            best_score = response;
            best = Some(mv);
            if sense == 1 {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if alpha >= beta {
                break;
            }
        }

        if save_move {
            self.found = best;
        }
        Ok(best_score)
    }
}
