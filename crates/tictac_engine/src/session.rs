//! Game session controller.
//!
//! A [`Session`] owns one board and drives it through
//! `Setup -> Active -> Terminal` (or `Aborted`). Human moves come in through
//! [`Session::submit_move`]; when the automated side is to move it answers in
//! the same call, after the injected [`ReplyPacer`] has run.

use crate::error::EngineError;
use crate::invariants::assert_invariants;
use crate::moves::{Move, legal_moves};
use crate::pacing::{Immediate, ReplyPacer};
use crate::policy::{Difficulty, MovePolicy};
use crate::rules::{Outcome, WinLine, evaluate, winning_line};
use crate::types::{Board, CELL_COUNT, Cell, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Who plays the second seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    Human,
    /// One side is played by a policy.
    Automated,
}

/// Resolved opponent configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opponent {
    /// Human vs human.
    Human,
    /// Human vs policy.
    Automated {
        /// Policy strength.
        difficulty: Difficulty,
        /// Mark the policy plays.
        mark: Player,
    },
}

impl Opponent {
    /// Resolves a mode and optional difficulty. The automated side plays O.
    ///
    /// # Errors
    ///
    /// [`EngineError::MissingDifficulty`] for automated mode without a difficulty.
    pub fn from_mode(mode: GameMode, difficulty: Option<Difficulty>) -> Result<Self, EngineError> {
        match (mode, difficulty) {
            (GameMode::Human, _) => Ok(Opponent::Human),
            (GameMode::Automated, Some(difficulty)) => Ok(Opponent::Automated {
                difficulty,
                mark: Player::O,
            }),
            (GameMode::Automated, None) => Err(EngineError::MissingDifficulty),
        }
    }

    /// The automated mark, if any.
    pub fn automated_mark(&self) -> Option<Player> {
        match self {
            Opponent::Human => None,
            Opponent::Automated { mark, .. } => Some(*mark),
        }
    }
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game configured.
    Setup,
    /// Moves are accepted.
    Active,
    /// Game over; holds the final outcome.
    Terminal(Outcome),
    /// Stopped because the automated side had no move to play.
    Aborted,
}

/// What one call to [`Session::submit_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TurnReport {
    /// The submitted move.
    played: Move,
    /// The automated answer, if one was made.
    reply: Option<Move>,
    /// Outcome after both moves.
    outcome: Outcome,
}

/// Serializable view of a session for a front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    pub cells: [Cell; CELL_COUNT],
    /// Player to move (X in setup).
    pub current_player: Player,
    /// Current outcome of the board.
    pub outcome: Outcome,
    /// Whether moves are accepted.
    pub active: bool,
    /// Line to highlight after a win.
    pub winning_line: Option<WinLine>,
    /// Status line for display.
    pub status: String,
}

#[derive(Debug)]
struct AutomatedSide {
    mark: Player,
    policy: Box<dyn MovePolicy>,
}

/// One game of tic-tac-toe and its configuration.
#[derive(Debug)]
pub struct Session {
    board: Board,
    current_player: Player,
    phase: Phase,
    opponent: Option<Opponent>,
    automated: Option<AutomatedSide>,
    pacer: Box<dyn ReplyPacer>,
    seed: Option<u64>,
    history: Vec<Move>,
}

impl Session {
    /// Creates a session in setup phase with no reply pause.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            phase: Phase::Setup,
            opponent: None,
            automated: None,
            pacer: Box::new(Immediate),
            seed: None,
            history: Vec::new(),
        }
    }

    /// Replaces the pacer run before automated replies.
    pub fn with_pacer(mut self, pacer: impl ReplyPacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Seeds the random source of policies built by later `start` calls.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Starts a new game, discarding any current one.
    ///
    /// The difficulty is ignored in human mode. Returns the automated opening
    /// move when the policy plays X (never with the default O seat).
    ///
    /// # Errors
    ///
    /// [`EngineError::MissingDifficulty`] for automated mode without a difficulty.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn start(
        &mut self,
        mode: GameMode,
        difficulty: Option<Difficulty>,
    ) -> Result<Option<Move>, EngineError> {
        let opponent = Opponent::from_mode(mode, difficulty)?;
        self.start_with(opponent)
    }

    /// Starts a new game against an explicit opponent.
    ///
    /// # Errors
    ///
    /// Only policy failures on the opening move, which cannot happen on an
    /// empty board.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn start_with(&mut self, opponent: Opponent) -> Result<Option<Move>, EngineError> {
        let automated = match opponent {
            Opponent::Human => None,
            Opponent::Automated { difficulty, mark } => Some(AutomatedSide {
                mark,
                policy: difficulty.policy(self.seed),
            }),
        };
        info!(?opponent, "Game started");
        self.begin(Some(opponent), automated)
    }

    /// Starts a new game with a caller-supplied policy playing `mark`.
    ///
    /// [`Session::opponent`] reports `None` for such a game, since no
    /// difficulty describes it.
    ///
    /// # Errors
    ///
    /// Whatever `policy` returns for an opening move when `mark` is X.
    #[instrument(skip(self, policy), fields(policy = policy.name()))]
    pub fn start_with_policy(
        &mut self,
        mark: Player,
        policy: Box<dyn MovePolicy>,
    ) -> Result<Option<Move>, EngineError> {
        info!(%mark, "Game started with a custom policy");
        self.begin(None, Some(AutomatedSide { mark, policy }))
    }

    /// Plays `index` for the current player, then lets the automated side
    /// answer if it is its turn.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameNotActive`] outside the active phase.
    /// - [`EngineError::InvalidMove`] for an out-of-range or occupied index;
    ///   board and current player are unchanged.
    /// - [`EngineError::NoLegalMove`] if the policy found nothing to play. The
    ///   session is forced terminal.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn submit_move(&mut self, index: usize) -> Result<TurnReport, EngineError> {
        if self.phase != Phase::Active {
            warn!(phase = ?self.phase, "Move submitted outside an active game");
            return Err(EngineError::GameNotActive);
        }

        let played = self.apply(index)?;
        let reply = if self.phase == Phase::Active && self.is_automated_turn() {
            Some(self.play_automated()?)
        } else {
            None
        };

        Ok(TurnReport {
            played,
            reply,
            outcome: self.outcome(),
        })
    }

    /// Returns to setup, clearing board, mode, difficulty and history.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn restart(&mut self) {
        self.reset();
        self.opponent = None;
        self.automated = None;
        self.phase = Phase::Setup;
        info!("Session reset to setup");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the configured opponent, `None` in setup or with a custom policy.
    pub fn opponent(&self) -> Option<Opponent> {
        self.opponent
    }

    /// Returns the moves played since the last start.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Evaluates the board now.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Cells a human may pick; empty unless the game is active.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_active() {
            legal_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// One-line status for display.
    pub fn status_message(&self) -> String {
        match self.phase {
            Phase::Setup => "Choose a game mode".to_string(),
            Phase::Active => format!("It's {}'s turn", self.current_player),
            Phase::Terminal(outcome) => outcome.to_string(),
            Phase::Aborted => "Game aborted".to_string(),
        }
    }

    /// Snapshot for rendering or serialization.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: *self.board.cells(),
            current_player: self.current_player,
            outcome: self.outcome(),
            active: self.is_active(),
            winning_line: winning_line(&self.board),
            status: self.status_message(),
        }
    }

    fn begin(
        &mut self,
        opponent: Option<Opponent>,
        automated: Option<AutomatedSide>,
    ) -> Result<Option<Move>, EngineError> {
        self.reset();
        self.opponent = opponent;
        self.automated = automated;
        self.phase = Phase::Active;

        if self.is_automated_turn() {
            return self.play_automated().map(Some);
        }
        Ok(None)
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.history.clear();
    }

    fn is_automated_turn(&self) -> bool {
        self.automated
            .as_ref()
            .is_some_and(|side| side.mark == self.current_player)
    }

    /// Validates and places one mark for the current player, then settles the
    /// phase and turn.
    fn apply(&mut self, index: usize) -> Result<Move, EngineError> {
        let player = self.current_player;
        self.board
            .place(index, player)
            .inspect_err(|err| warn!(index, %player, %err, "Rejected move"))?;
        let played = Move::new(player, index);
        self.history.push(played);
        assert_invariants(&self.board);
        debug!(%played, board = %self.board.to_compact(), "Move applied");

        let outcome = self.outcome();
        if outcome.is_terminal() {
            self.phase = Phase::Terminal(outcome);
            info!(%outcome, moves = self.history.len(), "Game over");
        } else {
            self.current_player = player.opponent();
        }
        Ok(played)
    }

    fn play_automated(&mut self) -> Result<Move, EngineError> {
        let mark = self.current_player;
        let Some(side) = self.automated.as_mut() else {
            error!(%mark, "Automated reply requested without an automated side");
            return Err(EngineError::NoLegalMove);
        };

        self.pacer.before_reply(mark);
        match side.policy.choose_move(&mut self.board, mark) {
            Ok(index) => self.apply(index),
            Err(EngineError::NoLegalMove) => {
                error!(
                    %mark,
                    board = %self.board.to_compact(),
                    "Policy found no legal move; aborting the game"
                );
                self.phase = Phase::Aborted;
                Err(EngineError::NoLegalMove)
            }
            Err(err) => Err(err),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
