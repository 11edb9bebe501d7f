//! Engine error types.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum InvalidMoveReason {
    /// Index is outside 0-8.
    #[display("index out of range")]
    OutOfRange,
    /// Cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
}

/// Errors raised by the board, the session controller and the policies.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Index outside 0-8 on a read.
    #[display("Index {} is out of range (must be 0-8)", index)]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// Placement rejected; the board was left untouched.
    #[display("Invalid move at {}: {}", index, reason)]
    InvalidMove {
        /// The rejected index.
        index: usize,
        /// Why it was rejected.
        reason: InvalidMoveReason,
    },

    /// A move was submitted while the session was not active.
    #[display("Game is not active")]
    GameNotActive,

    /// A policy was asked to move on a finished or full board.
    ///
    /// This is an orchestration bug, never a normal game condition.
    #[display("No legal move available")]
    NoLegalMove,

    /// Automated mode was requested without a difficulty.
    #[display("Automated mode requires a difficulty")]
    MissingDifficulty,

    /// A board string could not be parsed.
    #[display("Cannot parse board: {}", message)]
    ParseBoard {
        /// What was wrong with the input.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an out-of-range placement.
    pub fn out_of_range_move(index: usize) -> Self {
        Self::InvalidMove {
            index,
            reason: InvalidMoveReason::OutOfRange,
        }
    }

    /// Shorthand for a placement on an occupied cell.
    pub fn occupied(index: usize) -> Self {
        Self::InvalidMove {
            index,
            reason: InvalidMoveReason::Occupied,
        }
    }
}
