//! Match state and the engine that drives it.
//!
//! [`GameState`] is a plain value: [`GameState::play`] never mutates, it
//! returns the next state or a [`MoveError`]. [`GameEngine`] owns one state
//! for the lifetime of a match and swaps it forward on every accepted move.

use super::action::{Move, MoveError};
use super::invariants::assert_transition;
use super::rules::{check_draw, check_win, place};
use super::turn_order::{Coin, TurnOrder};
use super::{Board, Outcome, PlayerId, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete state of one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) turn_order: TurnOrder,
    /// Slot in `turn_order` of the player to move.
    pub(super) active: usize,
    pub(super) move_count: usize,
    pub(super) outcome: Outcome,
    pub(super) last_move: Option<Move>,
}

impl GameState {
    /// Creates a new match: empty board, no moves, in progress.
    #[instrument]
    pub fn new(turn_order: TurnOrder) -> Self {
        Self {
            board: Board::new(),
            turn_order,
            active: 0,
            move_count: 0,
            outcome: Outcome::InProgress,
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn order fixed at creation.
    pub fn turn_order(&self) -> TurnOrder {
        self.turn_order
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the match is over this stays on the player who made the last move.
    pub fn active_player(&self) -> PlayerId {
        self.turn_order.player_at(self.active)
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The most recent accepted move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Plays the active player's token at `(row, col)` and returns the next state.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`MoveError::GameOver`] if the outcome is already decided.
    /// - [`MoveError::OutOfBounds`] if `row` or `col` is outside `0..=2`.
    /// - [`MoveError::CellOccupied`] if the target square is taken.
    #[instrument(skip(self), fields(player = ?self.active_player(), move_count = self.move_count))]
    pub fn play(&self, row: usize, col: usize) -> Result<GameState, MoveError> {
        if self.outcome.is_terminal() {
            warn!(outcome = %self.outcome, "Move attempted after game over");
            return Err(MoveError::GameOver);
        }

        let position =
            Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        let player = self.active_player();
        let board = place(&self.board, position, player)?;
        let move_count = self.move_count + 1;

        let outcome = match check_win(&board) {
            Some(winner) => Outcome::Won(winner),
            None if check_draw(&board, move_count) => Outcome::Draw,
            None => Outcome::InProgress,
        };

        let active = if outcome.is_terminal() {
            self.active
        } else {
            (self.active + 1) % 2
        };

        let next = GameState {
            board,
            turn_order: self.turn_order,
            active,
            move_count,
            outcome,
            last_move: Some(Move::new(player, position)),
        };

        assert_transition(self, &next);

        if outcome.is_terminal() {
            info!(%outcome, move_count, "Match finished");
        } else {
            debug!(%position, "Move accepted");
        }

        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(TurnOrder::default())
    }
}

/// Tic-tac-toe game engine owning a single match.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Starts a match with a known turn order.
    #[instrument]
    pub fn new(turn_order: TurnOrder) -> Self {
        Self {
            state: GameState::new(turn_order),
        }
    }

    /// Starts a match whose turn order is decided by one flip of `coin`.
    #[instrument(skip(coin))]
    pub fn from_coin<C: Coin + ?Sized>(coin: &mut C) -> Self {
        Self::new(TurnOrder::from_coin(coin))
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> PlayerId {
        self.state.active_player()
    }

    /// Makes a move for the active player at `(row, col)`.
    ///
    /// On error the state is left exactly as it was.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        self.state = self.state.play(row, col)?;
        Ok(self.state.outcome())
    }

    /// Consumes the engine, returning the final state.
    pub fn into_state(self) -> GameState {
        self.state
    }
}
