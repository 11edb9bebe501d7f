//! Invariants that hold for every board a session produces.

use crate::types::{Board, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Marks alternate starting with X: X count minus O count is 0 or 1.
pub struct AlternatingMarks;

impl Invariant<Board> for AlternatingMarks {
    fn holds(board: &Board) -> bool {
        let x_count = board.mark_count(Player::X);
        let o_count = board.mark_count(Player::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark alternation violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X moves first and marks alternate"
    }
}

/// Panics in debug builds if a board invariant is broken.
pub fn assert_invariants(board: &Board) {
    debug_assert!(
        AlternatingMarks::holds(board),
        "{}",
        AlternatingMarks::description()
    );
}
