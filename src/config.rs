//! Engine configuration

use crate::error::{AtaxxResult, GameError};
use crate::search::MAX_DEPTH;

/// Deepest search accepted. Win scores are offset by the remaining depth
/// and must stay below the alpha-beta window bound.
pub const MAX_SUPPORTED_DEPTH: u8 = 16;

/// Settings for an [`AIEngine`](crate::engine::AIEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    /// Seed for the engine's random source
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: MAX_DEPTH,
            seed: 0,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// # Errors
    /// `GameError::InvalidConfig` if `depth` is 0 or above
    /// [`MAX_SUPPORTED_DEPTH`]
    pub fn validate(&self) -> AtaxxResult<()> {
        if self.depth == 0 {
            return Err(GameError::InvalidConfig(
                "search depth must be at least 1".to_string(),
            ));
        }
        if self.depth > MAX_SUPPORTED_DEPTH {
            return Err(GameError::InvalidConfig(format!(
                "search depth {} exceeds maximum {MAX_SUPPORTED_DEPTH}",
                self.depth
            )));
        }
        Ok(())
    }
}
