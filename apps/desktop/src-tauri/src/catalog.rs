//! Catalog acquisition and the loaded-catalog slot.
//!
//! The catalog document is fetched once per app session from the backend.
//! The slot carries a generation counter so a fetch that was superseded by
//! a newer load (or by teardown) can never install a stale catalog.

use std::sync::Arc;

use wordgym_core::types::Unit;
use wordgym_core::Catalog;

/// Holder for the currently loaded catalog.
#[derive(Default)]
pub struct CatalogSlot {
    generation: u64,
    catalog: Option<Arc<Catalog>>,
}

impl CatalogSlot {
    /// Mark a new load as started and return its generation token.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Install a fetched catalog, unless a newer load superseded this one.
    pub fn complete_load(&mut self, generation: u64, catalog: Catalog) -> Option<Arc<Catalog>> {
        if generation != self.generation {
            return None;
        }
        let catalog = Arc::new(catalog);
        self.catalog = Some(Arc::clone(&catalog));
        Some(catalog)
    }

    pub fn current(&self) -> Option<Arc<Catalog>> {
        self.catalog.clone()
    }
}

/// Catalog fetch failure, reported to the screen as-is; retry is a manual
/// user action.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("catalog request failed: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("catalog file could not be read: {0}")]
    Unreadable(#[from] std::io::Error),

    #[error(transparent)]
    Malformed(#[from] wordgym_core::CoreError),
}

/// Fetch the typed catalog document from the backend.
pub async fn fetch_catalog(base_url: &str) -> Result<Catalog, FetchError> {
    let url = format!("{}/api/catalog", base_url.trim_end_matches('/'));
    let units: Vec<Unit> = reqwest::get(&url)
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(Catalog::new(units))
}

/// Parse a raw catalog document from a local file (offline use).
pub fn read_catalog_file(path: &str) -> Result<Catalog, FetchError> {
    let body = std::fs::read_to_string(path)?;
    Ok(Catalog::from_json(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_load_is_discarded() {
        let mut slot = CatalogSlot::default();
        let first = slot.begin_load();
        let second = slot.begin_load();

        // The first fetch returns after the second load began.
        assert!(slot.complete_load(first, Catalog::new(vec![])).is_none());
        assert!(slot.current().is_none());

        assert!(slot.complete_load(second, Catalog::new(vec![])).is_some());
        assert!(slot.current().is_some());
    }

    #[test]
    fn completed_load_is_visible() {
        let mut slot = CatalogSlot::default();
        let generation = slot.begin_load();
        slot.complete_load(generation, Catalog::new(vec![]));
        assert!(slot.current().is_some());
    }
}
