//! Error taxonomy for scoring and game sessions

use thiserror::Error;

use super::Outcome;
use crate::core::Color;

/// Input that does not fit the game's shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Code must be exactly {expected} pegs, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Color '{0}' is not in this game's palette")]
    ColorNotInPalette(Color),

    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("Palette lists '{0}' more than once")]
    DuplicateColor(Color),

    #[error("Code length must be at least 1")]
    ZeroLength,

    #[error("Attempt budget must be at least 1")]
    ZeroAttempts,
}

/// Errors from submitting a guess to a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Game is over ({outcome}); start a new game to keep playing")]
    GameOver { outcome: Outcome },
}
