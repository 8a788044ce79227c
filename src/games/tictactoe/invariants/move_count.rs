//! Move counter invariant.

use super::{Invariant, Transition};

/// Invariant: the move counter equals the number of occupied squares.
pub struct MoveCountInvariant;

impl<'a> Invariant<Transition<'a>> for MoveCountInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let after = transition.after;
        after.move_count() == after.board().occupied()
            && after.move_count() == transition.before.move_count() + 1
    }

    fn description() -> &'static str {
        "Move count matches occupied squares"
    }
}
