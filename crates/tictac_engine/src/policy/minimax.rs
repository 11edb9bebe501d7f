//! Impossible opponent: exhaustive minimax.
//!
//! Scores are fixed to one perspective: O is the maximizer and X the
//! minimizer, whoever the automated side is. The mover picks max when it is
//! O and min when it is X, so the same search plays either mark.
//!
//! No pruning and no cache. The tree below any 3x3 position has at most 9!
//! leaves.

use super::{MovePolicy, playable_moves};
use crate::error::EngineError;
use crate::moves::legal_moves;
use crate::rules::{Outcome, evaluate};
use crate::types::{Board, Player, SearchNode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Terminal score of a board won by O.
pub const WIN_SCORE: i32 = 10;

/// Terminal score of a board won by X.
pub const LOSS_SCORE: i32 = -10;

/// A candidate move with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell index.
    pub index: usize,
    /// Value of the position after the move, from O's perspective.
    pub score: i32,
}

/// Full-depth minimax.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalPolicy;

impl OptimalPolicy {
    /// Creates the optimal policy.
    pub fn new() -> Self {
        Self
    }
}

fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Won(Player::X) => Some(LOSS_SCORE),
        Outcome::Won(Player::O) => Some(WIN_SCORE),
        Outcome::Draw => Some(0),
        Outcome::InProgress => None,
    }
}

/// Value of `node` with `to_move` about to play.
fn minimax<N: SearchNode>(node: &mut N, to_move: Player) -> Result<i32, EngineError> {
    if let Some(score) = terminal_score(evaluate(node.board())) {
        return Ok(score);
    }
    let scored = score_moves(node, to_move)?;
    select(&scored, to_move)
        .map(|best| best.score)
        .ok_or(EngineError::NoLegalMove)
}

/// Scores every legal move for `to_move`, in ascending index order.
///
/// Each move is tried as a speculative mark and undone before the next one.
pub fn score_moves<N: SearchNode>(
    node: &mut N,
    to_move: Player,
) -> Result<Vec<ScoredMove>, EngineError> {
    let mut scored = Vec::new();
    for index in legal_moves(node.board()) {
        let mut branch = node.speculate(index, to_move)?;
        let score = minimax(&mut branch, to_move.opponent())?;
        scored.push(ScoredMove { index, score });
    }
    Ok(scored)
}

/// Best candidate for `to_move`: max for O, min for X.
///
/// Only a strict improvement replaces the current best, so ties go to the
/// earliest candidate.
fn select(scored: &[ScoredMove], to_move: Player) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for candidate in scored {
        let improves = match best {
            None => true,
            Some(current) => match to_move {
                Player::O => candidate.score > current.score,
                Player::X => candidate.score < current.score,
            },
        };
        if improves {
            best = Some(*candidate);
        }
    }
    best
}

impl MovePolicy for OptimalPolicy {
    #[instrument(skip(self, board), fields(board = %board.to_compact()))]
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Result<usize, EngineError> {
        playable_moves(board)?;
        let scored = score_moves(board, player)?;
        let best = select(&scored, player).ok_or(EngineError::NoLegalMove)?;
        debug!(index = best.index, score = best.score, "Minimax choice");
        Ok(best.index)
    }

    fn name(&self) -> &str {
        "optimal"
    }
}
