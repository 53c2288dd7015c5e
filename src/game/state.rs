//! Game state and its transitions
//!
//! `GameState` is a value. Submitting a guess returns the next state and
//! leaves the current one untouched, so a renderer can hold on to any state
//! it has drawn and an undo is just keeping the previous value.

use rand::Rng;
use std::fmt;
use tracing::{debug, info};

use super::{GameConfig, GameError, InputError};
use crate::core::{Code, Feedback, generate_secret};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// True for `Won` and `Lost`
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// Zero-based row on the board
    pub index: usize,
    pub guess: Code,
    pub feedback: Feedback,
}

/// A single game: the hidden secret plus every attempt so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    secret: Code,
    attempts: Vec<Attempt>,
    outcome: Outcome,
}

impl GameState {
    /// Start a game with a freshly drawn secret
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let secret = generate_secret(config.palette(), config.code_length(), rng);
        info!(
            code_length = config.code_length(),
            max_attempts = config.max_attempts(),
            "new game started"
        );

        Self {
            config,
            secret,
            attempts: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Start a game with a known secret
    ///
    /// # Errors
    /// Returns `InputError` if the secret has the wrong length or uses a
    /// color outside the palette.
    pub fn with_secret(config: GameConfig, secret: Code) -> Result<Self, InputError> {
        validate_code(&config, &secret)?;

        Ok(Self {
            config,
            secret,
            attempts: Vec::new(),
            outcome: Outcome::InProgress,
        })
    }

    /// Score `guess` and return the resulting state
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game is won or lost
    /// - `GameError::InvalidInput` if the guess has the wrong length or a
    ///   color outside the palette
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    /// use mastermind::game::{GameConfig, GameState, Outcome};
    ///
    /// let game = GameState::with_secret(GameConfig::default(), Code::parse("rgby").unwrap()).unwrap();
    /// let next = game.submit_guess(Code::parse("rgyb").unwrap()).unwrap();
    ///
    /// assert_eq!(next.attempts().len(), 1);
    /// assert_eq!(next.attempts()[0].feedback.exact(), 2);
    /// assert_eq!(next.outcome(), Outcome::InProgress);
    /// assert!(game.attempts().is_empty());
    /// ```
    pub fn submit_guess(&self, guess: Code) -> Result<Self, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver {
                outcome: self.outcome,
            });
        }

        validate_code(&self.config, &guess)?;
        let feedback = Feedback::evaluate(&self.secret, &guess)?;

        let index = self.attempts.len();
        debug!(
            attempt = index + 1,
            exact = feedback.exact(),
            color_only = feedback.color_only(),
            "guess scored"
        );

        let mut attempts = self.attempts.clone();
        attempts.push(Attempt {
            index,
            guess,
            feedback,
        });

        let outcome = if feedback.is_solved(self.config.code_length()) {
            Outcome::Won
        } else if attempts.len() >= self.config.max_attempts() {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        if outcome.is_terminal() {
            info!(%outcome, attempts = attempts.len(), "game finished");
        }

        Ok(Self {
            config: self.config.clone(),
            secret: self.secret.clone(),
            attempts,
            outcome,
        })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts() - self.attempts.len()
    }

    /// The secret, regardless of outcome
    ///
    /// Presentation layers should prefer `revealed_secret`.
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// The secret once the game has ended, `None` while it is in progress
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Code> {
        self.outcome.is_terminal().then_some(&self.secret)
    }
}

fn validate_code(config: &GameConfig, code: &Code) -> Result<(), InputError> {
    if code.len() != config.code_length() {
        return Err(InputError::LengthMismatch {
            expected: config.code_length(),
            actual: code.len(),
        });
    }

    if let Some(&color) = code.colors().iter().find(|&&c| !config.palette().contains(c)) {
        return Err(InputError::ColorNotInPalette(color));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Palette};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game(secret: &str) -> GameState {
        GameState::with_secret(GameConfig::default(), Code::parse(secret).unwrap()).unwrap()
    }

    fn guess(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    #[test]
    fn new_game_is_in_progress() {
        let state = GameState::new(GameConfig::default(), &mut StdRng::seed_from_u64(1));
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.secret().len(), 4);
        assert!(state.attempts().is_empty());
        assert_eq!(state.remaining_attempts(), 10);
        assert_eq!(state.revealed_secret(), None);
    }

    #[test]
    fn winning_guess_ends_game() {
        let state = game("rgby").submit_guess(guess("rgby")).unwrap();
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.attempts()[0].feedback, Feedback::new(4, 0));
        assert_eq!(state.revealed_secret(), Some(&guess("rgby")));
    }

    #[test]
    fn win_on_final_attempt_is_a_win() {
        let mut state = game("rgby");
        for _ in 0..9 {
            state = state.submit_guess(guess("pppp")).unwrap();
        }
        let state = state.submit_guess(guess("rgby")).unwrap();
        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.attempts().len(), 10);
    }

    #[test]
    fn budget_exhaustion_loses_then_rejects() {
        let mut state = game("rgby");
        for i in 0..10 {
            assert_eq!(state.outcome(), Outcome::InProgress);
            state = state.submit_guess(guess("oooo")).unwrap();
            assert_eq!(state.attempts()[i].index, i);
        }
        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.remaining_attempts(), 0);
        assert!(state.revealed_secret().is_some());

        assert_eq!(
            state.submit_guess(guess("rgby")),
            Err(GameError::GameOver {
                outcome: Outcome::Lost
            })
        );
    }

    #[test]
    fn won_game_rejects_more_guesses() {
        let state = game("rrrr").submit_guess(guess("rrrr")).unwrap();
        assert!(matches!(
            state.submit_guess(guess("bbbb")),
            Err(GameError::GameOver {
                outcome: Outcome::Won
            })
        ));
    }

    #[test]
    fn wrong_length_guess_is_rejected_without_consuming_attempt() {
        let state = game("rgby");
        let result = state.submit_guess(guess("rgb"));
        assert_eq!(
            result,
            Err(GameError::InvalidInput(InputError::LengthMismatch {
                expected: 4,
                actual: 3
            }))
        );
        assert!(state.attempts().is_empty());
        assert_eq!(state.remaining_attempts(), 10);
    }

    #[test]
    fn off_palette_guess_is_rejected() {
        let palette = Palette::new([Color::Red, Color::Blue]).unwrap();
        let config = GameConfig::new(4, 10, palette).unwrap();
        let state = GameState::with_secret(config, guess("rbrb")).unwrap();
        assert_eq!(
            state.submit_guess(guess("rbrg")),
            Err(GameError::InvalidInput(InputError::ColorNotInPalette(
                Color::Green
            )))
        );
    }

    #[test]
    fn with_secret_validates() {
        assert_eq!(
            GameState::with_secret(GameConfig::default(), guess("rgbyp")),
            Err(InputError::LengthMismatch {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn submit_does_not_mutate_previous_state() {
        let first = game("rgby");
        let second = first.submit_guess(guess("yyyy")).unwrap();
        let third = second.submit_guess(guess("rrrr")).unwrap();
        assert_eq!(first.attempts().len(), 0);
        assert_eq!(second.attempts().len(), 1);
        assert_eq!(third.attempts().len(), 2);
        assert_eq!(first.secret(), third.secret());
    }
}
