//! Board configuration

use super::InputError;
use crate::core::{Color, Palette};

/// Pegs per code on the classic board
pub const CODE_LENGTH: usize = 4;

/// Guesses allowed before the game is lost
pub const MAX_ATTEMPTS: usize = 10;

/// Colors of the classic board, in picker order
pub const PALETTE: [Color; 6] = Color::ALL;

/// Shape of a game: code length, attempt budget, and palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    code_length: usize,
    max_attempts: usize,
    palette: Palette,
}

impl GameConfig {
    /// # Errors
    /// Returns `InputError::ZeroLength` or `InputError::ZeroAttempts` for an
    /// empty board.
    pub fn new(code_length: usize, max_attempts: usize, palette: Palette) -> Result<Self, InputError> {
        if code_length == 0 {
            return Err(InputError::ZeroLength);
        }
        if max_attempts == 0 {
            return Err(InputError::ZeroAttempts);
        }

        Ok(Self {
            code_length,
            max_attempts,
            palette,
        })
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            max_attempts: MAX_ATTEMPTS,
            palette: Palette::classic(),
        }
    }
}
