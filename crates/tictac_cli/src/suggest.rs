//! One-shot move suggestion for a given board.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tictac_engine::{
    Board, Difficulty, Outcome, Player, ScoredMove, evaluate, legal_moves, score_moves,
};
use tracing::instrument;

/// JSON report printed by `suggest --json`.
#[derive(Debug, Serialize)]
struct Suggestion {
    board: String,
    player: Player,
    difficulty: Difficulty,
    outcome: Outcome,
    legal_moves: Vec<usize>,
    index: usize,
    /// Minimax value of every legal move; only for the impossible policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<Vec<ScoredMove>>,
}

/// Prints the index `difficulty` would play for `player` on `board`.
///
/// # Errors
///
/// [`tictac_engine::EngineError::NoLegalMove`] for a finished board, and I/O
/// or serialization failures.
#[instrument(skip(out))]
pub fn run<W: Write>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    seed: Option<u64>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let mut board = board.clone();
    let mut policy = difficulty.policy(seed);
    let index = policy.choose_move(&mut board, player)?;

    if !json {
        writeln!(out, "{}", index)?;
        return Ok(());
    }

    let scores = match difficulty {
        Difficulty::Impossible => Some(score_moves(&mut board, player)?),
        Difficulty::Easy | Difficulty::Medium => None,
    };
    let suggestion = Suggestion {
        board: board.to_compact(),
        player,
        difficulty,
        outcome: evaluate(&board),
        legal_moves: legal_moves(&board),
        index,
        scores,
    };
    serde_json::to_writer_pretty(&mut *out, &suggestion)?;
    writeln!(out)?;
    Ok(())
}
