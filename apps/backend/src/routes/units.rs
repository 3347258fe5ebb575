//! Unit endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use wordgym_core::types::{Unit, UnitCategory};

use crate::error::{ApiError, Result};
use crate::models::{UnitListParams, UnitListResponse, UnitSummary};
use crate::AppState;

/// GET /api/catalog
///
/// The full catalog document: every unit with its words, categories
/// already typed. This is what the desktop app fetches once per session.
pub async fn catalog_document(State(state): State<AppState>) -> Json<Vec<Unit>> {
    Json(state.catalog.units().to_vec())
}

/// GET /api/units?category=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<UnitListParams>,
) -> Result<Json<UnitListResponse>> {
    let units: Vec<UnitSummary> = match params.category.as_deref() {
        Some(raw) => {
            let category = UnitCategory::from_str(raw)
                .ok_or_else(|| ApiError::BadRequest(format!("unknown category: {}", raw)))?;
            state
                .catalog
                .units_in(category)
                .into_iter()
                .map(UnitSummary::from_unit)
                .collect()
        }
        None => state
            .catalog
            .units()
            .iter()
            .map(UnitSummary::from_unit)
            .collect(),
    };

    Ok(Json(UnitListResponse { units }))
}

/// GET /api/units/:id
///
/// Mix units (id >= 1000) are synthesized on the fly from their two
/// category constituents.
pub async fn get_unit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Unit>> {
    let unit = state.catalog.unit(id)?;
    Ok(Json(unit))
}
