//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{PlayerId, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their token at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: PlayerId,
    /// The position where the player places their token.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} placed '{}' at {}",
            self.player,
            self.player.token(),
            self.position
        )
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is an input error the caller can recover from by asking for
/// a different move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column is outside `0..=2`.
    #[display("Square ({}, {}) is off the board; rows and columns run from 0 to 2", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
