//! Medium opponent: one ply of lookahead.
//!
//! Take a winning cell if there is one, else block the opponent's winning
//! cell, else fall back to a random move. Both scans run in ascending index
//! order and stop at the first hit.

use super::random::RandomPolicy;
use super::{MovePolicy, playable_moves};
use crate::error::EngineError;
use crate::rules::{Outcome, evaluate};
use crate::types::{Board, Player};
use rand::Rng;
use tracing::{debug, instrument};

/// Win, else block, else random.
#[derive(Debug, Clone)]
pub struct HeuristicPolicy<R> {
    fallback: RandomPolicy<R>,
}

impl<R: Rng> HeuristicPolicy<R> {
    /// Creates a heuristic policy whose fallback draws from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            fallback: RandomPolicy::new(rng),
        }
    }
}

/// First index in `moves` where placing `mark` completes a line for `mark`.
fn completing_move(
    board: &mut Board,
    moves: &[usize],
    mark: Player,
) -> Result<Option<usize>, EngineError> {
    for &index in moves {
        let trial = board.speculate(index, mark)?;
        if evaluate(&trial) == Outcome::Won(mark) {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

impl<R: Rng + std::fmt::Debug> MovePolicy for HeuristicPolicy<R> {
    #[instrument(skip(self, board), fields(board = %board.to_compact()))]
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Result<usize, EngineError> {
        let moves = playable_moves(board)?;

        if let Some(index) = completing_move(board, &moves, player)? {
            debug!(index, "Taking the win");
            return Ok(index);
        }

        if let Some(index) = completing_move(board, &moves, player.opponent())? {
            debug!(index, "Blocking the opponent");
            return Ok(index);
        }

        let index = self.fallback.pick(board)?;
        debug!(index, "No threat, playing randomly");
        Ok(index)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn policy() -> HeuristicPolicy<SmallRng> {
        HeuristicPolicy::new(SmallRng::seed_from_u64(11))
    }

    #[test]
    fn test_takes_win_before_block() {
        let mut board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(policy().choose_move(&mut board, Player::X), Ok(2));
        assert_eq!(policy().choose_move(&mut board, Player::O), Ok(5));
    }

    #[test]
    fn test_blocks_threat() {
        // X threatens the left column; O has nothing to complete.
        let mut board: Board = "X..XO....".parse().unwrap();
        assert_eq!(policy().choose_move(&mut board, Player::O), Ok(6));
    }

    #[test]
    fn test_lowest_winning_index_first() {
        // O can win at 2 (top row) or 6 (left column).
        let mut board: Board = "OO.OXX.XX".parse().unwrap();
        assert_eq!(policy().choose_move(&mut board, Player::O), Ok(2));
    }

    #[test]
    fn test_board_unchanged_after_scan() {
        let mut board: Board = "X...O...X".parse().unwrap();
        let before = board.clone();
        let index = policy().choose_move(&mut board, Player::O).unwrap();
        assert_eq!(board, before);
        assert_eq!(board.is_empty(index), Ok(true));
    }

    #[test]
    fn test_falls_back_to_legal_random_move() {
        let mut board: Board = "....X....".parse().unwrap();
        let mut policy = policy();
        for _ in 0..20 {
            let index = policy.choose_move(&mut board, Player::O).unwrap();
            assert_ne!(index, 4);
        }
    }
}
