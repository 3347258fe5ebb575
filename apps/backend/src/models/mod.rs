//! API response and query types

use serde::{Deserialize, Serialize};

// Re-export shared types from wordgym-core
pub use wordgym_core::types::{Unit, UnitCategory, Word};

/// One row of the unit listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSummary {
    pub id: i64,
    pub title: String,
    pub category: UnitCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_number: Option<u32>,
    pub word_count: usize,
}

impl UnitSummary {
    pub fn from_unit(unit: &Unit) -> Self {
        Self {
            id: unit.id,
            title: unit.title.clone(),
            category: unit.category,
            base_number: unit.base_number,
            word_count: unit.words.len(),
        }
    }
}

/// GET /api/units response.
#[derive(Debug, Serialize, Deserialize)]
pub struct UnitListResponse {
    pub units: Vec<UnitSummary>,
}

/// GET /api/units query parameters.
#[derive(Debug, Deserialize)]
pub struct UnitListParams {
    pub category: Option<String>,
}

/// GET /api/words response.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordListResponse {
    pub words: Vec<Word>,
}

/// GET /api/words/search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}
