//! Catalog-related Tauri commands.

use tauri::State;

use wordgym_core::types::{Unit, UnitCategory, Word};

use super::{current_catalog, CommandError};
use crate::catalog::{fetch_catalog, read_catalog_file};
use crate::state::AppState;

/// Summary row for the unit picker.
#[derive(Debug, serde::Serialize)]
pub struct UnitOverview {
    pub id: i64,
    pub title: String,
    pub category: UnitCategory,
    pub word_count: usize,
}

impl UnitOverview {
    fn from_unit(unit: &Unit) -> Self {
        Self {
            id: unit.id,
            title: unit.title.clone(),
            category: unit.category,
            word_count: unit.words.len(),
        }
    }
}

/// Result of a catalog load.
#[derive(Debug, serde::Serialize)]
pub struct CatalogInfo {
    pub unit_count: usize,
    pub word_count: usize,
}

/// Fetch the catalog from the backend and install it.
///
/// A fetch that completes after a newer load started is discarded, so a
/// screen that re-triggered loading never sees a stale document win.
#[tauri::command]
pub async fn load_catalog(
    base_url: String,
    state: State<'_, AppState>,
) -> Result<CatalogInfo, CommandError> {
    let generation = state.catalog.lock().await.begin_load();

    let catalog = fetch_catalog(&base_url).await?;

    let mut slot = state.catalog.lock().await;
    match slot.complete_load(generation, catalog) {
        Some(catalog) => Ok(CatalogInfo {
            unit_count: catalog.units().len(),
            word_count: catalog.all_words().len(),
        }),
        None => Err(CommandError::new("catalog load was superseded")),
    }
}

/// Load the catalog from a local document instead of the backend.
#[tauri::command]
pub async fn load_catalog_file(
    path: String,
    state: State<'_, AppState>,
) -> Result<CatalogInfo, CommandError> {
    let generation = state.catalog.lock().await.begin_load();

    let catalog = read_catalog_file(&path)?;

    let mut slot = state.catalog.lock().await;
    match slot.complete_load(generation, catalog) {
        Some(catalog) => Ok(CatalogInfo {
            unit_count: catalog.units().len(),
            word_count: catalog.all_words().len(),
        }),
        None => Err(CommandError::new("catalog load was superseded")),
    }
}

/// List units, optionally narrowed to one category.
#[tauri::command]
pub async fn list_units(
    category: Option<String>,
    state: State<'_, AppState>,
) -> Result<Vec<UnitOverview>, CommandError> {
    let catalog = current_catalog(&state).await?;

    let units = match category.as_deref() {
        Some(raw) => {
            let category = UnitCategory::from_str(raw)
                .ok_or_else(|| CommandError::new(format!("unknown category: {}", raw)))?;
            catalog
                .units_in(category)
                .into_iter()
                .map(UnitOverview::from_unit)
                .collect()
        }
        None => catalog.units().iter().map(UnitOverview::from_unit).collect(),
    };
    Ok(units)
}

/// Resolve one unit, including synthesized mix units.
#[tauri::command]
pub async fn get_unit(unit_id: i64, state: State<'_, AppState>) -> Result<Unit, CommandError> {
    let catalog = current_catalog(&state).await?;
    catalog.unit(unit_id).map_err(Into::into)
}

/// Dictionary search across the whole catalog.
#[tauri::command]
pub async fn search_words(
    term: String,
    state: State<'_, AppState>,
) -> Result<Vec<Word>, CommandError> {
    let catalog = current_catalog(&state).await?;
    Ok(catalog.search(&term).into_iter().cloned().collect())
}
