//! Error types for the Ataxx engine
//!
//! Contract violations (illegal moves, bad undo, illegal blocks) and
//! text-surface failures share one enum so every fallible call returns
//! the same [`AtaxxResult`].

use thiserror::Error;

use crate::board::Square;
use crate::moves::Move;

/// Errors that can occur while playing or searching
#[derive(Error, Debug)]
pub enum GameError {
    /// Move is not legal in the current position
    #[error("Illegal move: {0}")]
    IllegalMove(Move),

    /// Pass requested while the side to move still has a move
    #[error("Cannot pass: a legal move exists")]
    PassWithLegalMove,

    /// Undo requested on a board with no applied moves
    #[error("No move to undo")]
    NothingToUndo,

    /// Undo log frames and move log out of step
    #[error("Undo log mismatch: {frames} frames for {moves} moves")]
    UndoLogMismatch { frames: usize, moves: usize },

    /// Block placement on an occupied square or after play started
    #[error("Illegal block placement at {0}")]
    IllegalBlock(Square),

    /// Text that is neither `-` nor `<col><row>-<col><row>`
    #[error("Invalid move text: {0:?}")]
    InvalidMoveText(String),

    /// Text that is not a square name like `c3`
    #[error("Invalid square: {0:?}")]
    InvalidSquareText(String),

    /// Color name other than red or blue
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Unrecognised front-end command
    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),

    /// Engine configuration out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O failure in a text front end
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations
pub type AtaxxResult<T> = Result<T, GameError>;
