//! Mastermind - CLI
//!
//! Play in a TUI or a plain line-based mode, or score a single guess.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{run_simple, score_codes},
    game::GameConfig,
    interactive::{App, run_tui},
    output::print_score_result,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack the hidden color code in ten attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the secret generator (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter written to stderr, e.g. 'debug' or 'mastermind=trace' (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a guess against a secret
    Score {
        /// The secret code, e.g. 'rgby' or 'red,green,blue,yellow'
        secret: String,

        /// The guess to score
        guess: String,
    },
}

fn init_logging(level: Option<&str>) {
    let filter = level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let config = GameConfig::default();

    match command {
        Commands::Play => run_tui(App::new(config, make_rng(cli.seed))),
        Commands::Simple => run_simple(&config, &mut make_rng(cli.seed)),
        Commands::Score { secret, guess } => {
            let result = score_codes(&secret, &guess)?;
            print_score_result(&result);
            Ok(())
        }
    }
}
