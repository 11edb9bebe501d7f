//! Easy opponent: a uniformly random legal move.

use super::{MovePolicy, playable_moves};
use crate::error::EngineError;
use crate::types::{Board, Player};
use rand::Rng;
use tracing::{debug, instrument};

/// Picks uniformly among the legal moves.
///
/// Generic over the random source so tests can seed it.
#[derive(Debug, Clone)]
pub struct RandomPolicy<R> {
    rng: R,
}

impl<R: Rng> RandomPolicy<R> {
    /// Creates a random policy over `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a random legal move without touching the board.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoLegalMove`] on a finished board.
    pub fn pick(&mut self, board: &Board) -> Result<usize, EngineError> {
        let moves = playable_moves(board)?;
        Ok(moves[self.rng.random_range(0..moves.len())])
    }
}

impl<R: Rng + std::fmt::Debug> MovePolicy for RandomPolicy<R> {
    #[instrument(skip(self, board), fields(board = %board.to_compact()))]
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Result<usize, EngineError> {
        let index = self.pick(board)?;
        debug!(index, "Random move");
        Ok(index)
    }

    fn name(&self) -> &str {
        "random"
    }
}
