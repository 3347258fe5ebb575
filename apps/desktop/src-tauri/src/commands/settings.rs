//! Preference Tauri commands.

use tauri::State;

use wordgym_core::types::UnitCategory;

use super::CommandError;
use crate::db::{PreferenceRepository, CATEGORY_FILTER_KEY};
use crate::state::AppState;

/// Last-selected unit-category filter, read by the unit list on mount.
#[tauri::command]
pub async fn get_category_filter(
    state: State<'_, AppState>,
) -> Result<Option<String>, CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    repo.get_preference(CATEGORY_FILTER_KEY).map_err(Into::into)
}

/// Persist the unit-category filter; `None` clears it.
#[tauri::command]
pub async fn set_category_filter(
    category: Option<String>,
    state: State<'_, AppState>,
) -> Result<(), CommandError> {
    let repo = state.repository.lock().expect("repository lock");
    match category {
        Some(raw) => {
            if UnitCategory::from_str(&raw).is_none() {
                return Err(CommandError::new(format!("unknown category: {}", raw)));
            }
            repo.set_preference(CATEGORY_FILTER_KEY, &raw).map_err(Into::into)
        }
        None => repo.clear_preference(CATEGORY_FILTER_KEY).map_err(Into::into),
    }
}
