//! Move-selection policies for the automated player.
//!
//! Every policy borrows the live board mutably for one call and hands it
//! back unchanged. Speculative marks go through [`Board::speculate`], whose
//! guard clears them on drop.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicPolicy;
pub use minimax::{LOSS_SCORE, OptimalPolicy, ScoredMove, WIN_SCORE, score_moves};
pub use random::RandomPolicy;

use crate::error::EngineError;
use crate::moves::legal_moves;
use crate::rules::{Outcome, evaluate};
use crate::types::{Board, Player};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Picks a cell for the player to move.
pub trait MovePolicy: std::fmt::Debug {
    /// Chooses an index for `player`.
    ///
    /// The board must be in progress with at least one empty cell. On return
    /// it is identical to the board passed in.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMove`] when called on a finished board.
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Result<usize, EngineError>;

    /// Returns the policy's display name.
    fn name(&self) -> &str;
}

/// Opponent strength, mapped onto a policy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Wins or blocks one ply ahead, otherwise random.
    Medium,
    /// Full minimax; never loses.
    Impossible,
}

impl Difficulty {
    /// Builds the policy for this difficulty.
    ///
    /// `seed` fixes the random source of the easy and medium policies; without
    /// it they draw from the OS.
    #[instrument]
    pub fn policy(self, seed: Option<u64>) -> Box<dyn MovePolicy> {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        match self {
            Difficulty::Easy => Box::new(RandomPolicy::new(rng)),
            Difficulty::Medium => Box::new(HeuristicPolicy::new(rng)),
            Difficulty::Impossible => Box::new(OptimalPolicy::new()),
        }
    }
}

/// Legal moves of a board a policy may act on.
///
/// # Errors
///
/// [`EngineError::NoLegalMove`] if the board is won, drawn or full.
pub(crate) fn playable_moves(board: &Board) -> Result<Vec<usize>, EngineError> {
    if evaluate(board) != Outcome::InProgress {
        return Err(EngineError::NoLegalMove);
    }
    let moves = legal_moves(board);
    if moves.is_empty() {
        return Err(EngineError::NoLegalMove);
    }
    Ok(moves)
}
