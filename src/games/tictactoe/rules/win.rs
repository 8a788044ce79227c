//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, PlayerId, Position};
use tracing::instrument;

/// Every line that wins the game, checked rows first, then columns, then
/// diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line found with three of the same
/// token, `None` otherwise.
#[instrument(skip(board))]
pub fn check_win(board: &Board) -> Option<PlayerId> {
    for [a, b, c] in LINES {
        if let Cell::Occupied(player) = board.get(a)
            && board.get(b) == Cell::Occupied(player)
            && board.get(c) == Cell::Occupied(player)
        {
            return Some(player);
        }
    }

    None
}
