//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold across every accepted
//! move. The engine checks them in debug builds; they are also testable on
//! their own.

mod balanced_tokens;
mod monotonic_board;
mod move_count;

pub use balanced_tokens::BalancedTokensInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use move_count::MoveCountInvariant;

use super::game::GameState;
use tracing::warn;

/// A state change produced by one accepted move.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// State before the move.
    pub before: &'a GameState,
    /// State after the move.
    pub after: &'a GameState,
}

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant the engine maintains across a move.
pub type EngineInvariants = (
    MonotonicBoardInvariant,
    MoveCountInvariant,
    BalancedTokensInvariant,
);

/// Asserts that a transition kept every engine invariant (debug builds only).
pub(crate) fn assert_transition(before: &GameState, after: &GameState) {
    if cfg!(debug_assertions) {
        let transition = Transition { before, after };
        let result = EngineInvariants::check_all(&transition);
        if let Err(violations) = &result {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Engine invariant violated");
        }
        debug_assert!(result.is_ok(), "Engine invariant violated");
    }
}
