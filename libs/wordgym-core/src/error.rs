//! Error types for wordgym-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors produced by the catalog and the session engines.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unit {id} not found")]
    UnitNotFound { id: i64 },

    #[error("malformed catalog document: {reason}")]
    MalformedCatalog { reason: String },

    #[error("players must choose different colors")]
    DuplicateColors,

    #[error("a matching session needs one or two players")]
    InvalidPlayerCount { count: usize },

    #[error("player name must not be empty")]
    EmptyPlayerName,

    #[error("session has not been started")]
    NotStarted,

    #[error("session is already completed")]
    SessionCompleted,

    #[error("tile {index} cannot be flipped now")]
    FlipRejected { index: usize },

    #[error("two tiles must be flipped before resolving")]
    NothingToResolve,

    #[error("no answer is expected in the current phase")]
    NotAwaitingAnswer,

    #[error("feedback must be acknowledged before advancing")]
    NotAwaitingAdvance,
}
