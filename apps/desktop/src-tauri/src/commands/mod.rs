//! Tauri commands exposed to the frontend.

pub mod catalog;
pub mod game;
pub mod quiz;
pub mod scores;
pub mod selftest;
pub mod settings;

use std::sync::Arc;
use uuid::Uuid;

use wordgym_core::{Catalog, CoreError};

use crate::catalog::FetchError;
use crate::db::DbError;
use crate::state::AppState;

/// Serializable error handed to the frontend; screens render the message
/// inline and decide whether to offer a retry.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn session_not_found(id: Uuid) -> Self {
        Self::new(format!("no active session {}", id))
    }
}

impl From<DbError> for CommandError {
    fn from(e: DbError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<CoreError> for CommandError {
    fn from(e: CoreError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<FetchError> for CommandError {
    fn from(e: FetchError) -> Self {
        Self::new(e.to_string())
    }
}

/// The loaded catalog, or the error every data-dependent screen shows
/// before `load_catalog` has succeeded.
pub async fn current_catalog(state: &AppState) -> Result<Arc<Catalog>, CommandError> {
    state
        .catalog
        .lock()
        .await
        .current()
        .ok_or_else(|| CommandError::new("catalog is not loaded yet"))
}

pub use catalog::{get_unit, list_units, load_catalog, load_catalog_file, search_words};
pub use game::{end_session, flip_tile, matching_state, resolve_matching, start_matching};
pub use quiz::{next_question, quiz_state, start_quiz, submit_answer};
pub use scores::{high_scores, save_score};
pub use selftest::{
    advance_self_test, self_test_state, start_self_test, submit_self_test_answer,
};
pub use settings::{get_category_filter, set_category_filter};
