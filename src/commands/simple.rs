//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::Code;
use crate::game::{GameConfig, GameError, GameState, Statistics};
use crate::output::formatters::palette_legend;
use crate::output::{print_attempt, print_game_over, print_statistics};
use anyhow::Result;
use rand::Rng;
use std::io::{self, Write};
use tracing::warn;

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Quit,
    NewGame,
    History,
    Stats,
    Guess(Code),
    Invalid(String),
}

impl SimpleCommand {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            "history" | "h" => Self::History,
            "stats" | "s" => Self::Stats,
            other => match Code::parse(other) {
                Ok(code) => Self::Guess(code),
                Err(e) => Self::Invalid(e.to_string()),
            },
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Mastermind - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Crack the {}-peg code in {} attempts.",
        config.code_length(),
        config.max_attempts()
    );
    println!("Colors: {}", palette_legend(config.palette().colors()));
    println!("Enter a guess like 'rgby' or 'red green blue yellow'.");
    println!("  ● = right color, right spot   ○ = right color, wrong spot\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'history', 'stats'\n");

    let mut stats = Statistics::default();
    let mut game = GameState::new(config.clone(), rng);

    loop {
        let prompt = format!(
            "Attempt {}/{}",
            game.attempts().len() + 1,
            config.max_attempts()
        );
        let Some(line) = get_user_input(&prompt)? else {
            // stdin closed
            println!();
            return Ok(());
        };

        match SimpleCommand::parse(&line) {
            SimpleCommand::Quit => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            SimpleCommand::NewGame => {
                game = GameState::new(config.clone(), rng);
                println!("\nNew game started!\n");
            }
            SimpleCommand::History => {
                if game.attempts().is_empty() {
                    println!("No guesses yet.\n");
                }
                for attempt in game.attempts() {
                    print_attempt(attempt, config.code_length());
                }
            }
            SimpleCommand::Stats => print_statistics(&stats),
            SimpleCommand::Invalid(reason) => println!("{reason}\n"),
            SimpleCommand::Guess(code) => match game.submit_guess(code) {
                Ok(next) => {
                    game = next;
                    if let Some(attempt) = game.attempts().last() {
                        print_attempt(attempt, config.code_length());
                    }

                    if game.outcome().is_terminal() {
                        stats.record(&game);
                        print_game_over(&game);

                        match get_user_input("Play again? (yes/no)")? {
                            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                                game = GameState::new(config.clone(), rng);
                                println!("\nNew game started!\n");
                            }
                            _ => {
                                print_statistics(&stats);
                                println!("\nThanks for playing!\n");
                                return Ok(());
                            }
                        }
                    }
                }
                Err(GameError::InvalidInput(e)) => println!("{e}\n"),
                Err(e @ GameError::GameOver { .. }) => {
                    warn!(error = %e, "guess submitted after game end");
                    println!("{e}\n");
                }
            },
        }
    }
}

/// Get user input with a prompt; `None` once stdin is exhausted
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
