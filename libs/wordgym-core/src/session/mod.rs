//! Game and quiz session state machines.
//!
//! Every session moves through the same phases:
//! `NotStarted → InProgress → AwaitingResolution → (InProgress | Completed)`.
//! `AwaitingResolution` is the window where the UI shows the pending pair
//! or the correctness feedback; the caller owns the display delay and then
//! calls the session's resolve/advance operation. `Completed` is terminal.

pub mod matching;
pub mod quiz;
pub mod selftest;

use serde::{Deserialize, Serialize};

/// Shared session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    AwaitingResolution,
    Completed,
}

impl SessionPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}
