//! Ataxx board engine and AI
//!
//! Ataxx is played on a 7x7 grid by red and blue. A piece either *extends*
//! to an adjacent empty square (adding a piece) or *jumps* two squares
//! (moving the piece); every opposing piece next to the landing square then
//! changes color. The game ends when a side has no pieces, the board is
//! full, neither side can move, or 25 jumps happen in a row; the side with
//! more pieces wins.
//!
//! # Architecture
//!
//! - [`board`]: Board state machine with an undo log
//! - [`moves`]: Move values and their text form
//! - [`rules`]: Captures, terminal status, block mirroring
//! - [`eval`]: Static evaluation
//! - [`search`]: Move enumeration and alpha-beta minimax
//! - [`engine`]: AI engine front end for the search
//! - [`game`]: Text command interpreter
//! - [`ui`]: egui desktop application
//!
//! # Quick Start
//!
//! ```
//! use ataxx::{AIEngine, Board, EngineConfig};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(EngineConfig::default().with_depth(2)).unwrap();
//!
//! board.make_move_str("a7-a6").unwrap();
//! let reply = engine.get_move(&board).unwrap();
//! board.make_move(reply).unwrap();
//! println!("{}", board.to_string_with_legend(true));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod moves;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, PieceColor, Square, BOARD_SIZE, JUMP_LIMIT, TOTAL_CELLS};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{AtaxxResult, GameError};
pub use moves::Move;
