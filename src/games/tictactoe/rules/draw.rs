//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_win;
use tracing::instrument;

/// Moves in a complete match; the board is full after this many.
pub const MAX_MOVES: usize = 9;

/// Checks whether the match is a draw.
///
/// A draw is only decidable once all nine moves have been placed and no line
/// is complete.
#[instrument(skip(board))]
pub fn check_draw(board: &Board, move_count: usize) -> bool {
    move_count == MAX_MOVES && check_win(board).is_none()
}
