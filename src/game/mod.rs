//! Game sessions
//!
//! Holds the secret, applies guesses, and tracks win/loss against the
//! attempt budget.

mod config;
mod error;
mod state;
mod stats;

pub use config::{CODE_LENGTH, GameConfig, MAX_ATTEMPTS, PALETTE};
pub use error::{GameError, InputError};
pub use state::{Attempt, GameState, Outcome};
pub use stats::Statistics;
