//! Tic-tac-toe - console binary
//!
//! Parses the command line, loads match config and hands stdin/stdout to a
//! [`ConsoleSession`].

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, FirstPlayer};
use std::path::PathBuf;
use tictactoe::{
    Coin, CoinFace, ConsoleSession, FixedCoin, MatchConfig, SeededCoin, SessionOptions, render,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            config,
            player_one,
            player_two,
            seed,
            first,
            instructions,
        } => {
            let overrides =
                MatchConfig::new(player_one, player_two, seed, instructions.then_some(true));
            run_match(config, overrides, first)
        }
        Command::Guide => {
            print!("{}", render::instructions());
            Ok(())
        }
    }
}

/// Plays one match on stdin/stdout.
#[instrument(skip(overrides))]
fn run_match(
    config_path: Option<PathBuf>,
    overrides: MatchConfig,
    first: Option<FirstPlayer>,
) -> Result<()> {
    let base = match config_path {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };
    let config = base.merged_with(overrides);

    let mut coin: Box<dyn Coin> = match (first, *config.seed()) {
        (Some(FirstPlayer::One), _) => Box::new(FixedCoin(CoinFace::Heads)),
        (Some(FirstPlayer::Two), _) => Box::new(FixedCoin(CoinFace::Tails)),
        (None, Some(seed)) => Box::new(SeededCoin::new(seed)),
        (None, None) => {
            let coin = SeededCoin::from_entropy();
            info!(seed = coin.seed(), "Unseeded match; rerun with --seed to reproduce");
            Box::new(coin)
        }
    };

    let options = SessionOptions::new(
        config.player_one().clone(),
        config.player_two().clone(),
        *config.instructions(),
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock());
    let outcome = session.run(&options, coin.as_mut())?;
    info!(%outcome, "Exiting");

    Ok(())
}
