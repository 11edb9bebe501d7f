//! Tictac - terminal tic-tac-toe
//!
//! Plays interactive games or suggests a move for a given board.

#![warn(missing_docs)]

mod cli;
mod config;
mod play;
mod suggest;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    match cli.command {
        Command::Play(args) => {
            let config = PlayConfig::load_or_default(&args.config)?.merge(&args);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            play::run(&config, stdin.lock(), &mut stdout)
        }
        Command::Suggest {
            board,
            player,
            difficulty,
            seed,
            json,
        } => suggest::run(
            &board,
            player,
            difficulty,
            seed,
            json,
            &mut std::io::stdout(),
        ),
    }
}
