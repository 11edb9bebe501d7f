//! Legal move enumeration and the move record.
//!
//! [`legal_moves`] lists what may be played. The session's move query and
//! every policy call it, so what a human is offered and what the search
//! explores cannot drift apart.

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Legal moves for `board`, ascending.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    board.empty_indices()
}

/// True if `index` is among the legal moves.
pub fn is_legal(board: &Board, index: usize) -> bool {
    matches!(board.is_empty(index), Ok(true))
}

/// A player placing their mark at an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell index (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}
