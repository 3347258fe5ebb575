//! High-score Tauri commands.

use chrono::Utc;
use tauri::State;

use wordgym_core::types::ScoreEntry;

use super::CommandError;
use crate::db::ScoreRepository;
use crate::state::AppState;

/// Load the ranked high-score list.
#[tauri::command]
pub async fn high_scores(state: State<'_, AppState>) -> Result<Vec<ScoreEntry>, CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.load_scores().map_err(Into::into)
}

/// Persist a self-test score and return the updated list.
#[tauri::command]
pub async fn save_score(
    name: String,
    score: u32,
    state: State<'_, AppState>,
) -> Result<Vec<ScoreEntry>, CommandError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(CommandError::new("a player name is required to save a score"));
    }

    let entry = ScoreEntry {
        name,
        score,
        recorded_at: Utc::now(),
    };

    let repo = state.repository.lock().expect("repository lock");
    repo.record_score(entry).map_err(Into::into)
}
