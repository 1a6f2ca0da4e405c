//! AI engine wrapping the minimax searcher
//!
//! The engine is what a front end talks to: it takes the live board by
//! reference, searches a private copy, and reports the chosen move with
//! statistics. A side that cannot move gets a pass without searching.
//!
//! # Example
//!
//! ```
//! use ataxx::{AIEngine, Board, EngineConfig};
//!
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_depth(2)).unwrap();
//! let mut board = Board::new();
//!
//! let result = engine.find_move(&board).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! board.make_move(result.best_move).unwrap();
//! ```

use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, PieceColor};
use crate::config::EngineConfig;
use crate::error::AtaxxResult;
use crate::moves::Move;
use crate::search::{SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Move to play; `Move::Pass` when the side has no step
    pub best_move: Move,
    /// Minimax value of the position, red-positive
    pub score: i32,
    /// Depth searched (0 for a forced pass)
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn forced_pass(time_ms: u64) -> Self {
        Self {
            best_move: Move::Pass,
            score: 0,
            depth: 0,
            nodes: 0,
            time_ms,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, best_move: Move, time_ms: u64) -> Self {
        Self {
            best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
        }
    }
}

/// Automated Ataxx player.
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
    /// Reserved for tie-breaking between equal moves; move selection is
    /// currently fully deterministic
    #[allow(dead_code)]
    rng: StdRng,
}

impl AIEngine {
    /// Engine with the default configuration (depth 4, seed 0).
    #[must_use]
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            searcher: Searcher::new(),
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    /// # Errors
    /// `GameError::InvalidConfig` if `config` fails validation
    pub fn with_config(config: EngineConfig) -> AtaxxResult<Self> {
        config.validate()?;
        Ok(Self {
            searcher: Searcher::new(),
            rng: StdRng::seed_from_u64(config.seed),
            config,
        })
    }

    /// Pick a move for the side to move on `board`.
    ///
    /// `board` is never modified. If the game is already decided there is
    /// nothing to play and `Move::Pass` comes back with the static score.
    pub fn find_move(&mut self, board: &Board) -> AtaxxResult<MoveResult> {
        let start = Instant::now();
        let color = board.whose_move();

        if !board.is_game_over() && !board.can_move(color) {
            debug!("{color} has no move, passing");
            return Ok(MoveResult::forced_pass(elapsed_ms(start)));
        }

        let result = self.searcher.search(board, self.config.depth)?;
        let best_move = result.best_move.unwrap_or(Move::Pass);
        let time_ms = elapsed_ms(start);
        debug!(
            "{color} search: {best_move} score={} nodes={} depth={} time={time_ms}ms",
            result.score, result.nodes, result.depth
        );
        Ok(MoveResult::from_search(result, best_move, time_ms))
    }

    /// Best move only. Use [`find_move`](Self::find_move) for statistics.
    pub fn get_move(&mut self, board: &Board) -> AtaxxResult<Move> {
        Ok(self.find_move(board)?.best_move)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    /// Change the search depth.
    ///
    /// # Errors
    /// `GameError::InvalidConfig` if the new depth is out of range; the
    /// engine keeps its previous depth.
    pub fn set_depth(&mut self, depth: u8) -> AtaxxResult<()> {
        let config = self.config.with_depth(depth);
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Reseed the engine's random source.
    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
