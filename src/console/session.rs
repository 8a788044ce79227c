//! Interactive console match.
//!
//! [`ConsoleSession`] owns the read/print loop around a [`GameEngine`]. It
//! works over any `BufRead`/`Write` pair so a whole match can be scripted.

use super::{input, render};
use crate::games::tictactoe::{
    Coin, CoinFace, GameEngine, MoveError, Outcome, PlayerId, TurnOrder,
};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Choices made before the first move.
///
/// `None` fields are asked for interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_new::new)]
pub struct SessionOptions {
    /// Name of Player 1.
    pub player_one: Option<String>,
    /// Name of Player 2.
    pub player_two: Option<String>,
    /// Whether to show the instruction guide.
    pub instructions: Option<bool>,
}

/// A console match over a reader and a writer.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session reading moves from `input` and printing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the session, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Plays one full match and returns its outcome.
    ///
    /// # Errors
    ///
    /// Fails if reading or writing fails, or if input ends before the match
    /// is decided. Bad moves are reported and asked for again, never returned.
    #[instrument(skip_all)]
    pub fn run(&mut self, options: &SessionOptions, coin: &mut dyn Coin) -> Result<Outcome> {
        write!(self.output, "{}", render::BANNER)?;
        writeln!(self.output, "Welcome to tic-tac-toe!\n")?;

        let names = [
            self.resolve_name(PlayerId::Player1, options.player_one.as_deref())?,
            self.resolve_name(PlayerId::Player2, options.player_two.as_deref())?,
        ];
        writeln!(
            self.output,
            "\n{} will use the '{}' token. {} will use the '{}' token.\n",
            PlayerId::Player1,
            PlayerId::Player1.token(),
            PlayerId::Player2,
            PlayerId::Player2.token(),
        )?;

        let show_instructions = match options.instructions {
            Some(show) => show,
            None => self.ask_yes_no(
                "Do you require instructions regarding how to play the game? [y/n]",
            )?,
        };
        if show_instructions {
            write!(self.output, "{}", render::instructions())?;
        }

        let turn_order = self.toss(coin)?;
        let mut engine = GameEngine::new(turn_order);
        info!(first = ?turn_order.first(), "Match started");

        let mut show_board = true;
        while !engine.outcome().is_terminal() {
            let player = engine.active_player();
            if show_board {
                write!(self.output, "{}", render::board(engine.state().board()))?;
                writeln!(
                    self.output,
                    "{} ({}) take your turn.\n",
                    player,
                    names[player.index()]
                )?;
                show_board = false;
            }
            writeln!(
                self.output,
                "Enter the row index followed by the column index of the square \
                 where you wish to place your token (separated by a space)"
            )?;

            let line = self
                .read_line()?
                .context("Input ended before the game was finished")?;

            let (row, col) = match input::parse_coordinates(&line) {
                Ok(coords) => coords,
                Err(e) => {
                    debug!(error = %e, "Unreadable move");
                    writeln!(self.output, "{}\n", e)?;
                    continue;
                }
            };

            match engine.make_move(row, col) {
                Ok(_) => {
                    show_board = true;
                    if let Some(last) = engine.state().last_move() {
                        writeln!(self.output, "\n{}\n", last)?;
                    }
                }
                Err(e @ (MoveError::OutOfBounds { .. } | MoveError::CellOccupied(_))) => {
                    debug!(error = %e, "Move rejected");
                    writeln!(self.output, "{}. Please make another choice.\n", e)?;
                }
                Err(MoveError::GameOver) => {
                    bail!("Engine reported game over while the match loop was running")
                }
            }
        }

        let outcome = engine.outcome();
        match outcome {
            Outcome::Won(winner) => writeln!(
                self.output,
                "{} ({}) has won the game!\n",
                winner,
                names[winner.index()]
            )?,
            Outcome::Draw => writeln!(
                self.output,
                "Nobody got three in a line after 9 moves. The game ends in a stalemate.\n"
            )?,
            Outcome::InProgress => bail!("Match loop exited while the game was still in progress"),
        }
        write!(self.output, "{}", render::board(engine.state().board()))?;
        self.output.flush()?;

        info!(%outcome, "Match over");
        Ok(outcome)
    }

    /// Flips the coin and announces who moves first.
    fn toss(&mut self, coin: &mut dyn Coin) -> Result<TurnOrder> {
        writeln!(
            self.output,
            "A coin toss will determine who will take the first turn. \
             Heads means that Player 1 will go first, tails means that Player 2 will go first.\n"
        )?;
        let face = coin.flip();
        let turn_order = TurnOrder::from_face(face);
        let verdict = match face {
            CoinFace::Heads => "Player 1 will make the first move!",
            CoinFace::Tails => "Player 2 will make the first move!",
        };
        writeln!(
            self.output,
            "Flipping coin...The coin landed on {}. {}\n",
            face, verdict
        )?;
        Ok(turn_order)
    }

    fn resolve_name(&mut self, player: PlayerId, configured: Option<&str>) -> Result<String> {
        if let Some(name) = configured.map(str::trim).filter(|n| !n.is_empty()) {
            writeln!(self.output, "{} is {}.", player, name)?;
            return Ok(name.to_string());
        }

        loop {
            write!(self.output, "{} please enter your name: ", player)?;
            self.output.flush()?;
            let line = self
                .read_line()?
                .with_context(|| format!("Input ended before {} entered a name", player))?;
            let name = line.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
            writeln!(self.output)?;
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            writeln!(self.output, "{}", question)?;
            self.output.flush()?;
            let line = self
                .read_line()?
                .context("Input ended before the question was answered")?;
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                other => {
                    warn!(answer = other, "Unrecognised yes/no answer");
                    writeln!(self.output, "Please answer 'y' or 'n'.")?;
                }
            }
        }
    }

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
