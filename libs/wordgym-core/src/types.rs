//! Core types for the vocabulary catalog and game sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single vocabulary entry.
///
/// Words are immutable once loaded; identity is `id`, unique within a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub word: String,
    pub translation: String,
    /// Additional acceptable translations beyond the primary one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<String>,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

/// Catalog unit category, derived from the unit title at load time.
///
/// Category membership and mix-unit pairing operate on this typed field;
/// the title text is presentation only after the catalog is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    ReadingWriting,
    ListeningSpeaking,
    /// Units whose title matches neither skill track (including mix units).
    General,
}

impl Default for UnitCategory {
    fn default() -> Self {
        Self::General
    }
}

impl UnitCategory {
    /// Get the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadingWriting => "reading_writing",
            Self::ListeningSpeaking => "listening_speaking",
            Self::General => "general",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "reading_writing" => Some(Self::ReadingWriting),
            "listening_speaking" => Some(Self::ListeningSpeaking),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    /// Classify a raw unit title.
    pub fn from_title(title: &str) -> Self {
        if title.contains("Reading & Writing") {
            Self::ReadingWriting
        } else if title.contains("Listening & Speaking") {
            Self::ListeningSpeaking
        } else {
            Self::General
        }
    }
}

/// Extract the unit number from a title such as `"Reading & Writing Unit 3"`.
///
/// Returns the digits following the last `"Unit "` marker, if any.
pub fn base_number_from_title(title: &str) -> Option<u32> {
    let idx = title.rfind("Unit ")?;
    let digits: String = title[idx + "Unit ".len()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// A named collection of vocabulary words.
///
/// Regular units come from the catalog document; mix units are synthesized
/// from a category pair sharing a base number (see `Catalog::unit`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: i64,
    pub title: String,
    pub category: UnitCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_number: Option<u32>,
    pub words: Vec<Word>,
}

impl Unit {
    /// Build a unit from the raw catalog fields, deriving the typed
    /// category and base number from the title.
    pub fn from_raw(id: i64, title: String, words: Vec<Word>) -> Self {
        let category = UnitCategory::from_title(&title);
        let base_number = base_number_from_title(&title);
        Self {
            id,
            title,
            category,
            base_number,
            words,
        }
    }
}

/// Player color tag for the two-player memory game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

/// A participant in a matching session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub color: PlayerColor,
    pub score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            name: name.into(),
            color,
            score: 0,
        }
    }
}

/// One persisted high-score row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub recorded_at: DateTime<Utc>,
}
