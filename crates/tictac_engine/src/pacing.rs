//! Pacing hook run before each automated reply.
//!
//! The engine stays synchronous. A front end that wants the opponent to
//! appear to think injects a pacer instead of scheduling a timer.

use crate::types::Player;
use std::time::Duration;
use tracing::trace;

/// Called right before the automated side picks its move.
pub trait ReplyPacer: std::fmt::Debug {
    /// Runs before `mark` replies.
    fn before_reply(&self, mark: Player);
}

/// No pause.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl ReplyPacer for Immediate {
    fn before_reply(&self, _mark: Player) {}
}

/// Sleeps for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    /// Delay of `millis` milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }
}

impl ReplyPacer for FixedDelay {
    fn before_reply(&self, mark: Player) {
        trace!(%mark, delay = ?self.0, "Pausing before reply");
        std::thread::sleep(self.0);
    }
}
