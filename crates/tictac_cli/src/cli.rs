//! Command-line interface for tictac.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictac_engine::{Board, Difficulty, GameMode, Player};

/// Tictac - tic-tac-toe against a friend or the machine
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe with an automated opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play(PlayArgs),

    /// Print the move a policy would choose for a board
    Suggest {
        /// Board as nine cells, e.g. "XX.OO...." ('.', '_' or '-' for empty)
        #[arg(short, long)]
        board: Board,

        /// Mark to move (x or o)
        #[arg(short, long)]
        player: Player,

        /// Policy to ask
        #[arg(short, long, default_value = "impossible")]
        difficulty: Difficulty,

        /// Seed for the easy and medium policies
        #[arg(long)]
        seed: Option<u64>,

        /// Print a JSON report instead of the bare index
        #[arg(long)]
        json: bool,
    },
}

/// Options for `play`; each one overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Opponent: human or automated
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Automated opponent strength: easy, medium or impossible
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Mark the automated opponent plays (x or o)
    #[arg(long)]
    pub automated_mark: Option<Player>,

    /// Pause before each automated reply, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the easy and medium policies
    #[arg(long)]
    pub seed: Option<u64>,
}
