//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] snapshot. Nothing here mutates, so the
//! same evaluation serves live sessions and speculative search boards.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WIN_LINES, WinLine, check_winner, winning_line};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Board is full with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "Game in progress"),
            Outcome::Won(player) => write!(f, "Player {} has won!", player),
            Outcome::Draw => write!(f, "Game ended in a draw!"),
        }
    }
}

/// Classifies the board.
///
/// Lines are checked in canonical order (rows, columns, diagonals), then a
/// full board is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
