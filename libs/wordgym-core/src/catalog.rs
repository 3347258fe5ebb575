//! The word catalog: unit lookup, mix-unit composition, category filters
//! and the flattened all-words pool.

use serde::Deserialize;

use crate::error::{CoreError, Result};
use crate::types::{Unit, UnitCategory, Word};

/// Unit identifiers at or above this value denote synthesized mix units;
/// `id - MIX_ID_BASE` is the shared base number of the two constituents.
pub const MIX_ID_BASE: i64 = 1000;

/// Identifier of the synthetic unit holding every word in the catalog.
pub const ALL_WORDS_UNIT_ID: i64 = 0;

/// Raw unit shape as stored in the catalog document.
#[derive(Debug, Deserialize)]
struct RawUnit {
    id: i64,
    title: String,
    #[serde(default)]
    words: Vec<Word>,
}

/// An immutable, loaded word catalog.
///
/// Categories and base numbers are derived from unit titles once, here;
/// every lookup afterwards works on the typed fields.
#[derive(Debug, Clone)]
pub struct Catalog {
    units: Vec<Unit>,
}

impl Catalog {
    /// Build a catalog from already-typed units.
    pub fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }

    /// Parse the catalog document body (a JSON array of units).
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: Vec<RawUnit> =
            serde_json::from_str(body).map_err(|e| CoreError::MalformedCatalog {
                reason: e.to_string(),
            })?;

        let units = raw
            .into_iter()
            .map(|u| Unit::from_raw(u.id, u.title, u.words))
            .collect();

        Ok(Self { units })
    }

    /// All catalog units, in document order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Units belonging to a category.
    pub fn units_in(&self, category: UnitCategory) -> Vec<&Unit> {
        self.units
            .iter()
            .filter(|u| u.category == category)
            .collect()
    }

    /// Resolve a unit by identifier.
    ///
    /// Identifiers below `MIX_ID_BASE` are looked up directly. At or above
    /// it, the Reading & Writing and Listening & Speaking units sharing the
    /// base number `id - MIX_ID_BASE` are concatenated into a mix unit;
    /// either one missing fails the whole lookup.
    pub fn unit(&self, id: i64) -> Result<Unit> {
        if id < MIX_ID_BASE {
            return self
                .units
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or(CoreError::UnitNotFound { id });
        }

        let base = (id - MIX_ID_BASE) as u32;
        let rw = self.find_paired(UnitCategory::ReadingWriting, base);
        let ls = self.find_paired(UnitCategory::ListeningSpeaking, base);

        match (rw, ls) {
            (Some(rw), Some(ls)) => {
                let mut words = Vec::with_capacity(rw.words.len() + ls.words.len());
                words.extend(rw.words.iter().cloned());
                words.extend(ls.words.iter().cloned());
                Ok(Unit {
                    id,
                    title: format!("Mix Unit {}", base),
                    category: UnitCategory::General,
                    base_number: Some(base),
                    words,
                })
            }
            _ => Err(CoreError::UnitNotFound { id }),
        }
    }

    fn find_paired(&self, category: UnitCategory, base: u32) -> Option<&Unit> {
        self.units
            .iter()
            .find(|u| u.category == category && u.base_number == Some(base))
    }

    /// Every word across every unit, in catalog order.
    pub fn all_words(&self) -> Vec<Word> {
        self.units.iter().flat_map(|u| u.words.iter().cloned()).collect()
    }

    /// The synthetic unit used by the whole-catalog self-test.
    pub fn all_words_unit(&self) -> Unit {
        Unit {
            id: ALL_WORDS_UNIT_ID,
            title: "All Words".to_string(),
            category: UnitCategory::General,
            base_number: None,
            words: self.all_words(),
        }
    }

    /// Case-insensitive substring search over words and translations.
    pub fn search(&self, term: &str) -> Vec<&Word> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.units
            .iter()
            .flat_map(|u| u.words.iter())
            .filter(|w| {
                w.word.to_lowercase().contains(&needle)
                    || w.translation.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
