//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand, ValueEnum};

/// Tic-tac-toe for two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player console tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match
    Play {
        /// Path to a TOML match config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Name of Player 1 (prompted if not given)
        #[arg(long)]
        player_one: Option<String>,

        /// Name of Player 2 (prompted if not given)
        #[arg(long)]
        player_two: Option<String>,

        /// Seed for the coin toss, for a reproducible first player
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the coin toss and let this player go first
        #[arg(long, value_enum)]
        first: Option<FirstPlayer>,

        /// Show the instruction guide without asking
        #[arg(long)]
        instructions: bool,
    },

    /// Print the instruction guide and exit
    Guide,
}

/// Player chosen to open the match.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstPlayer {
    /// Player 1
    One,
    /// Player 2
    Two,
}
