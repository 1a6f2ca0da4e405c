//! Who supplies the moves for each color

use std::fmt;
use std::str::FromStr;

use crate::board::PieceColor;
use crate::error::{AtaxxResult, GameError};

/// How a side chooses its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerKind {
    /// Moves are read from the input stream
    #[default]
    Manual,
    /// Moves come from the AI engine
    Auto,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayerKind::Manual => "manual",
            PlayerKind::Auto => "auto",
        })
    }
}

impl FromStr for PlayerKind {
    type Err = GameError;

    fn from_str(s: &str) -> AtaxxResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" | "human" => Ok(PlayerKind::Manual),
            "auto" | "ai" => Ok(PlayerKind::Auto),
            _ => Err(GameError::UnknownCommand(s.to_string())),
        }
    }
}

/// Player assignment for both colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Players {
    red: PlayerKind,
    blue: PlayerKind,
}

impl Default for Players {
    /// Red is played by hand, blue by the engine.
    fn default() -> Self {
        Self {
            red: PlayerKind::Manual,
            blue: PlayerKind::Auto,
        }
    }
}

impl Players {
    pub fn new(red: PlayerKind, blue: PlayerKind) -> Self {
        Self { red, blue }
    }

    /// Kind playing `color`. Non-piece colors read as manual.
    pub fn get(&self, color: PieceColor) -> PlayerKind {
        match color {
            PieceColor::Red => self.red,
            PieceColor::Blue => self.blue,
            _ => PlayerKind::Manual,
        }
    }

    /// # Errors
    /// `GameError::InvalidColor` if `color` is not red or blue
    pub fn set(&mut self, color: PieceColor, kind: PlayerKind) -> AtaxxResult<()> {
        match color {
            PieceColor::Red => self.red = kind,
            PieceColor::Blue => self.blue = kind,
            other => return Err(GameError::InvalidColor(other.to_string())),
        }
        Ok(())
    }
}
