//! Word pool endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::{SearchParams, WordListResponse};
use crate::AppState;

/// GET /api/words
///
/// The flattened pool of every word in the catalog, used by the
/// whole-catalog self-test.
pub async fn list_all(State(state): State<AppState>) -> Result<Json<WordListResponse>> {
    Ok(Json(WordListResponse {
        words: state.catalog.all_words(),
    }))
}

/// GET /api/words/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<WordListResponse>> {
    let words = state
        .catalog
        .search(&params.q)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(WordListResponse { words }))
}
