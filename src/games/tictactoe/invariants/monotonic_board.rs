//! Monotonic board invariant: squares never change once set.

use super::super::{Cell, Position};
use super::{Invariant, Transition};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Every square occupied before a move keeps its owner afterwards, and a move
/// fills exactly one previously empty square.
pub struct MonotonicBoardInvariant;

impl<'a> Invariant<Transition<'a>> for MonotonicBoardInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let before = transition.before.board();
        let after = transition.after.board();

        let mut filled = 0;
        for pos in Position::ALL {
            match (before.get(pos), after.get(pos)) {
                (Cell::Occupied(a), Cell::Occupied(b)) if a != b => return false,
                (Cell::Occupied(_), Cell::Empty) => return false,
                (Cell::Empty, Cell::Occupied(_)) => filled += 1,
                _ => {}
            }
        }

        filled == 1
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{GameState, PlayerId, TurnOrder};
    use super::*;

    #[test]
    fn test_single_move_holds() {
        let before = GameState::new(TurnOrder::default());
        let after = before.play(0, 0).unwrap();
        assert!(MonotonicBoardInvariant::holds(&Transition {
            before: &before,
            after: &after,
        }));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let before = GameState::new(TurnOrder::default()).play(1, 1).unwrap();
        let mut after = before.play(0, 0).unwrap();
        after
            .board
            .set(Position::Center, Cell::Occupied(PlayerId::Player2));
        assert!(!MonotonicBoardInvariant::holds(&Transition {
            before: &before,
            after: &after,
        }));
    }

    #[test]
    fn test_no_new_square_violates() {
        let before = GameState::new(TurnOrder::default());
        let after = before.clone();
        assert!(!MonotonicBoardInvariant::holds(&Transition {
            before: &before,
            after: &after,
        }));
    }
}
