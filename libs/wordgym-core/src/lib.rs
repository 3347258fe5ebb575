//! Core vocabulary-learning engine shared by the backend and desktop apps.
//!
//! Provides:
//! - The word catalog: unit lookup, mix-unit composition, category filters
//! - Pair-deck building for matching games
//! - Multiple-choice option generation
//! - Session state machines (matching, quiz, self-test)
//! - Typed-answer evaluation and the capped high-score list

pub mod answer;
pub mod catalog;
pub mod deck;
pub mod error;
pub mod options;
pub mod scores;
pub mod session;
pub mod types;

pub use answer::AnswerKey;
pub use catalog::{Catalog, ALL_WORDS_UNIT_ID, MIX_ID_BASE};
pub use deck::{build_deck, Tile, TileKind};
pub use error::{CoreError, Result};
pub use options::{ChoiceSet, DEFAULT_OPTION_COUNT};
pub use scores::{Leaderboard, MAX_ENTRIES};
pub use session::matching::{FlipOutcome, MatchSession, ResolveOutcome};
pub use session::quiz::{Advance, Question, QuizKind, QuizSession};
pub use session::selftest::{SelfTestSession, TestRecord};
pub use session::SessionPhase;
pub use types::{Player, PlayerColor, ScoreEntry, Unit, UnitCategory, Word};
