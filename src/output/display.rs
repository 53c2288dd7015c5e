//! Display functions for command results

use super::formatters::{code_to_pegs, feedback_to_pegs};
use crate::commands::ScoreResult;
use crate::game::{Attempt, GameState, Outcome, Statistics};
use colored::Colorize;

/// Print the result of scoring one guess against a secret
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Secret: {}  ({})", code_to_pegs(&result.secret), result.secret);
    println!("Guess:  {}  ({})", code_to_pegs(&result.guess), result.guess);
    println!("{}", "─".repeat(40).cyan());

    let length = result.secret.len();
    println!(
        "Feedback: {}",
        feedback_to_pegs(result.feedback, length).bright_white().bold()
    );
    println!("   Exact:       {}", result.feedback.exact().to_string().green());
    println!(
        "   Color only:  {}",
        result.feedback.color_only().to_string().yellow()
    );
    println!(
        "   Misses:      {}",
        result.feedback.misses(length).to_string().bright_black()
    );
}

/// Print one row of the board
pub fn print_attempt(attempt: &Attempt, code_length: usize) {
    println!(
        "  {:>2}. {}   {}",
        (attempt.index + 1).to_string().bright_black(),
        code_to_pegs(&attempt.guess),
        feedback_to_pegs(attempt.feedback, code_length).bright_white()
    );
}

/// Print the end-of-game banner with the revealed secret
pub fn print_game_over(game: &GameState) {
    let Some(secret) = game.revealed_secret() else {
        return;
    };

    println!("\n{}", "═".repeat(50).bright_cyan());
    match game.outcome() {
        Outcome::Won => {
            let turns = game.attempts().len();
            println!(
                "{}",
                "   Congratulations! You cracked the code!"
                    .bright_green()
                    .bold()
            );
            println!(
                "   Solved in {} {}",
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "attempt" } else { "attempts" }
            );
        }
        Outcome::Lost => {
            println!(
                "{}",
                "   Game over! You failed to crack the code.".red().bold()
            );
        }
        Outcome::InProgress => {}
    }
    println!("   Secret: {}  ({secret})", code_to_pegs(secret));
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the running tally for this process
pub fn print_statistics(stats: &Statistics) {
    println!(
        "\nGames: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );

    let mut rows: Vec<_> = stats.distribution.iter().collect();
    rows.sort_unstable();
    for (attempts, count) in rows {
        println!("  {attempts:>2}: {}", "█".repeat(*count).green());
    }
}
