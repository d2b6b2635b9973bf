//! First-class invariants over boards and board transitions.
//!
//! Invariants are logical properties that hold throughout legal play. They
//! are testable on their own and the session layer checks them in debug
//! builds after every applied move.

use crate::types::{Board, Cell};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
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

impl std::error::Error for InvariantViolation {}

/// Checks an invariant, turning a failure into an [`InvariantViolation`].
pub fn check<S: ?Sized, I: Invariant<S>>(state: &S) -> Result<(), InvariantViolation> {
    if I::holds(state) {
        Ok(())
    } else {
        warn!(invariant = I::description(), "Invariant violated");
        Err(InvariantViolation::new(I::description()))
    }
}

/// Invariant: the two marks' counts differ by at most one.
///
/// Holds for every board reached by alternating play, whichever side
/// opened the game.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let a = board.count(Cell::PlayerA);
        let b = board.count(Cell::PlayerB);
        a.abs_diff(b) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

/// Invariant: a transition fills exactly one empty cell.
///
/// Checked on `(before, after)` pairs. No cell is ever cleared or
/// overwritten by a move.
pub struct MonotonicTransition;

impl Invariant<(Board, Board)> for MonotonicTransition {
    fn holds((before, after): &(Board, Board)) -> bool {
        let mut filled = 0;
        for (old, new) in before.cells().zip(after.cells()) {
            if old == new {
                continue;
            }
            if old != Cell::Empty || new == Cell::Empty {
                return false;
            }
            filled += 1;
        }
        filled == 1
    }

    fn description() -> &'static str {
        "A move fills exactly one empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, apply_move};

    #[test]
    fn test_balanced_holds_for_empty_board() {
        assert!(BalancedMarks::holds(&Board::new()));
    }

    #[test]
    fn test_balanced_detects_skew() {
        let board: Board = "XX. ... ...".parse().unwrap();
        assert!(!BalancedMarks::holds(&board));
        assert!(check::<Board, BalancedMarks>(&board).is_err());
    }

    #[test]
    fn test_monotonic_holds_after_move() {
        let before: Board = "X.. .O. ...".parse().unwrap();
        let after = apply_move(&before, 2, 2, Mark::PlayerA).unwrap();
        assert!(MonotonicTransition::holds(&(before, after)));
    }

    #[test]
    fn test_monotonic_detects_overwrite() {
        let before: Board = "X.. .O. ...".parse().unwrap();
        let after: Board = "O.. .O. ...".parse().unwrap();
        assert!(!MonotonicTransition::holds(&(before, after)));
    }

    #[test]
    fn test_monotonic_rejects_no_change() {
        let board: Board = "X.. ... ...".parse().unwrap();
        let violation = check::<(Board, Board), MonotonicTransition>(&(board, board));
        assert_eq!(
            violation,
            Err(InvariantViolation::new("A move fills exactly one empty cell"))
        );
    }
}
