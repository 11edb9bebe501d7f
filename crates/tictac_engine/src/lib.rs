//! Tic-tac-toe rules engine with an automated opponent.
//!
//! # Architecture
//!
//! - **Board**: nine cells, placement, and scoped speculative marks
//! - **Rules**: win lines and outcome evaluation
//! - **Moves**: the single legal-move enumerator
//! - **Policies**: random, one-ply heuristic, and full minimax
//! - **Session**: turn alternation, automated replies, restart
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Difficulty, GameMode, Outcome, Session};
//!
//! # fn example() -> Result<(), tictac_engine::EngineError> {
//! let mut session = Session::new().with_seed(7);
//! session.start(GameMode::Automated, Some(Difficulty::Impossible))?;
//!
//! let report = session.submit_move(0)?;
//! assert_eq!(report.reply().map(|m| m.index), Some(4));
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod invariants;
mod moves;
mod pacing;
mod policy;
mod rules;
mod session;
mod types;

// Crate-level exports - Errors
pub use error::{EngineError, InvalidMoveReason};

// Crate-level exports - Board model
pub use types::{Board, CELL_COUNT, Cell, Player, SearchNode, Speculation};

// Crate-level exports - Rules
pub use rules::{Outcome, WIN_LINES, WinLine, check_winner, evaluate, is_draw, winning_line};

// Crate-level exports - Move enumeration
pub use moves::{Move, is_legal, legal_moves};

// Crate-level exports - Policies
pub use policy::{
    Difficulty, HeuristicPolicy, LOSS_SCORE, MovePolicy, OptimalPolicy, RandomPolicy, ScoredMove,
    WIN_SCORE, score_moves,
};

// Crate-level exports - Invariants
pub use invariants::{AlternatingMarks, Invariant};

// Crate-level exports - Session
pub use pacing::{FixedDelay, Immediate, ReplyPacer};
pub use session::{GameMode, Opponent, Phase, Session, Snapshot, TurnReport};
