//! Move placement rules for tic-tac-toe.

use super::super::action::MoveError;
use super::super::{Board, Cell, PlayerId, Position};
use tracing::{debug, instrument};

/// Places `player`'s token at `(row, col)` and returns the resulting board.
///
/// The input board is never modified.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if `row` or `col` is outside `0..=2`.
/// - [`MoveError::CellOccupied`] if the target cell is not empty.
#[instrument(skip(board))]
pub fn apply_move(
    board: &Board,
    row: usize,
    col: usize,
    player: PlayerId,
) -> Result<Board, MoveError> {
    let position = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
    place(board, position, player)
}

/// Places `player`'s token at a named position and returns the resulting board.
///
/// # Errors
///
/// Returns [`MoveError::CellOccupied`] if the position is not empty.
#[instrument(skip(board))]
pub fn place(board: &Board, position: Position, player: PlayerId) -> Result<Board, MoveError> {
    if !board.is_empty(position) {
        debug!(%position, "Rejected move onto occupied square");
        return Err(MoveError::CellOccupied(position));
    }

    let mut next = *board;
    next.set(position, Cell::Occupied(player));
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_sets_cell() {
        let board = Board::new();
        let next = apply_move(&board, 1, 2, PlayerId::Player1).unwrap();
        assert_eq!(
            next.get(Position::MiddleRight),
            Cell::Occupied(PlayerId::Player1)
        );
        assert_eq!(next.occupied(), 1);
        // Input untouched
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            apply_move(&board, 3, 0, PlayerId::Player1),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            apply_move(&board, 0, 7, PlayerId::Player2),
            Err(MoveError::OutOfBounds { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_apply_move_occupied() {
        let board = apply_move(&Board::new(), 1, 1, PlayerId::Player1).unwrap();
        let result = apply_move(&board, 1, 1, PlayerId::Player2);
        assert_eq!(result, Err(MoveError::CellOccupied(Position::Center)));
        assert_eq!(board.get(Position::Center), Cell::Occupied(PlayerId::Player1));
    }
}
