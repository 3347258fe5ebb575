//! The capped, ranked high-score list.

use serde::{Deserialize, Serialize};

use crate::types::ScoreEntry;

/// Maximum number of persisted entries.
pub const MAX_ENTRIES: usize = 10;

/// High-score list, sorted descending by score and capped at `MAX_ENTRIES`.
///
/// Persistence is the caller's concern; the list is always read and written
/// wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Wrap an already-persisted list, re-establishing order and the cap.
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_ENTRIES);
        Self { entries }
    }

    /// Record a new entry: insert in rank order, evicting the lowest entry
    /// when the list is full. Ties rank existing entries first.
    pub fn record(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
        // Stable sort keeps earlier entries ahead of an equal newcomer.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ScoreEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn entry(name: &str, score: u32) -> ScoreEntry {
        ScoreEntry {
            name: name.to_string(),
            score,
            recorded_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn records_in_descending_order() {
        let mut board = Leaderboard::default();
        board.record(entry("a", 3));
        board.record(entry("b", 9));
        board.record(entry("c", 5));

        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![9, 5, 3]);
    }

    #[test]
    fn evicts_lowest_when_full() {
        // Ten entries, all >= 7 except one straggler at 2.
        let mut board = Leaderboard::default();
        for i in 0..9 {
            board.record(entry(&format!("p{}", i), 7 + i as u32));
        }
        board.record(entry("straggler", 2));
        assert_eq!(board.entries().len(), MAX_ENTRIES);

        board.record(entry("newcomer", 7));

        assert_eq!(board.entries().len(), MAX_ENTRIES);
        assert!(board.entries().iter().all(|e| e.name != "straggler"));
        let newcomer_rank = board
            .entries()
            .iter()
            .position(|e| e.name == "newcomer")
            .unwrap();
        // Sorted position: after the existing 7, before nothing lower.
        assert_eq!(newcomer_rank, MAX_ENTRIES - 1);
    }

    #[test]
    fn ties_keep_existing_entries_first() {
        let mut board = Leaderboard::default();
        board.record(entry("first", 4));
        board.record(entry("second", 4));
        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn from_entries_restores_invariants() {
        let raw = (0..15).map(|i| entry(&format!("p{}", i), i as u32)).collect();
        let board = Leaderboard::from_entries(raw);
        assert_eq!(board.entries().len(), MAX_ENTRIES);
        assert_eq!(board.entries()[0].score, 14);
        assert_eq!(board.entries()[MAX_ENTRIES - 1].score, 5);
    }
}
