//! Per-process game statistics

use rustc_hash::FxHashMap;

use super::{GameState, Outcome};

/// Running tally across the games played in this process
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Attempts taken -> number of games won in that many attempts
    pub distribution: FxHashMap<usize, usize>,
}

impl Statistics {
    /// Count a finished game; unfinished games are ignored
    pub fn record(&mut self, game: &GameState) {
        match game.outcome() {
            Outcome::InProgress => {}
            Outcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                *self.distribution.entry(game.attempts().len()).or_insert(0) += 1;
            }
            Outcome::Lost => self.total_games += 1,
        }
    }

    /// Percentage of finished games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
