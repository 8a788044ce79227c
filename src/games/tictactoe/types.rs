//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Player 1 (plays the `o` token).
    Player1,
    /// Player 2 (plays the `x` token).
    Player2,
}

impl PlayerId {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// Zero-based slot of this player (0 for Player 1, 1 for Player 2).
    pub fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }

    /// One-based player number as shown to people.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// The token this player marks the board with.
    pub fn token(self) -> char {
        match self {
            PlayerId::Player1 => 'o',
            PlayerId::Player2 => 'x',
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(PlayerId),
}

impl Cell {
    /// Token shown for this cell; a space when empty.
    pub fn token(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(player) => player.token(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Nothing in the type stops an occupied cell from being overwritten through
/// [`Board::set`]; the move rules in [`super::rules`] are what enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order, indexed by `row * 3 + col`.
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from three rows of cells, top row first.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut board = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                board.cells[row * 3 + col] = *cell;
            }
        }
        board
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Number of cells held by `player`.
    pub fn count(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied() == self.cells.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current outcome of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a line.
    Won(PlayerId),
    /// All nine moves placed with no line completed.
    Draw,
}

impl Outcome {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_is_row_major() {
        let p = Cell::Occupied(PlayerId::Player1);
        let e = Cell::Empty;
        let board = Board::from_rows([[e, p, e], [e, e, e], [e, e, p]]);
        assert_eq!(board.get(Position::TopCenter), p);
        assert_eq!(board.get(Position::BottomRight), p);
        assert_eq!(board.occupied(), 2);
        assert_eq!(board.count(PlayerId::Player2), 0);
    }

    #[test]
    fn test_tokens() {
        assert_eq!(PlayerId::Player1.token(), 'o');
        assert_eq!(PlayerId::Player2.token(), 'x');
        assert_eq!(Cell::Empty.token(), ' ');
        assert_eq!(PlayerId::Player2.to_string(), "Player 2");
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Won(PlayerId::Player1).winner(), Some(PlayerId::Player1));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
