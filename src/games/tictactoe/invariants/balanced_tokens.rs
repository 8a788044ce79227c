//! Token balance invariant.

use super::super::PlayerId;
use super::{Invariant, Transition};

/// Invariant: the two players' token counts differ by at most one.
///
/// Strict alternation from a fixed turn order can never break this.
pub struct BalancedTokensInvariant;

impl<'a> Invariant<Transition<'a>> for BalancedTokensInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let board = transition.after.board();
        board
            .count(PlayerId::Player1)
            .abs_diff(board.count(PlayerId::Player2))
            <= 1
    }

    fn description() -> &'static str {
        "Token counts differ by at most one"
    }
}
