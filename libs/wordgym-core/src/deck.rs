//! Pair-deck construction for matching-style games.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::types::Word;

/// Which face of a word pair a tile carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    Word,
    Translation,
}

/// One face of a matching pair.
///
/// Two tiles share a `word_id`, one of each kind. `matched` is monotonic:
/// once set it never reverts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub word_id: i64,
    pub kind: TileKind,
    pub content: String,
    pub flipped: bool,
    pub matched: bool,
}

impl Tile {
    fn new(word_id: i64, kind: TileKind, content: String) -> Self {
        Self {
            word_id,
            kind,
            content,
            flipped: false,
            matched: false,
        }
    }
}

/// Build a shuffled deck of paired tiles.
///
/// Samples `min(sample, words.len())` words when a sample size is given
/// (the pair-matching exercise plays 6 pairs, the memory game the whole
/// unit), then emits one word tile and one translation tile per sampled
/// word. Both the sampling and the final deck order use the unbiased
/// `rand` shuffle; decks differ run to run by design. An empty word list
/// yields an empty deck.
pub fn build_deck(words: &[Word], sample: Option<usize>) -> Vec<Tile> {
    let mut rng = rand::thread_rng();

    let mut pool: Vec<&Word> = words.iter().collect();
    pool.shuffle(&mut rng);
    if let Some(limit) = sample {
        pool.truncate(limit);
    }

    let mut tiles: Vec<Tile> = pool
        .iter()
        .flat_map(|w| {
            [
                Tile::new(w.id, TileKind::Word, w.word.clone()),
                Tile::new(w.id, TileKind::Translation, w.translation.clone()),
            ]
        })
        .collect();

    tiles.shuffle(&mut rng);
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Word;
    use std::collections::HashMap;

    fn words(n: usize) -> Vec<Word> {
        (0..n)
            .map(|i| Word {
                id: i as i64 + 1,
                word: format!("word-{}", i),
                translation: format!("translation-{}", i),
                translations: Vec::new(),
                definition: String::new(),
                meaning: String::new(),
                examples: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn full_deck_has_two_tiles_per_word() {
        let deck = build_deck(&words(7), None);
        assert_eq!(deck.len(), 14);

        let mut per_word: HashMap<i64, (usize, usize)> = HashMap::new();
        for tile in &deck {
            let entry = per_word.entry(tile.word_id).or_default();
            match tile.kind {
                TileKind::Word => entry.0 += 1,
                TileKind::Translation => entry.1 += 1,
            }
        }
        assert_eq!(per_word.len(), 7);
        assert!(per_word.values().all(|&counts| counts == (1, 1)));
    }

    #[test]
    fn sampled_deck_is_capped() {
        let deck = build_deck(&words(20), Some(6));
        assert_eq!(deck.len(), 12);
    }

    #[test]
    fn sample_larger_than_input_uses_everything() {
        let deck = build_deck(&words(4), Some(12));
        assert_eq!(deck.len(), 8);
    }

    #[test]
    fn empty_input_yields_empty_deck() {
        assert!(build_deck(&[], None).is_empty());
        assert!(build_deck(&[], Some(6)).is_empty());
    }

    #[test]
    fn tiles_start_face_down_and_unmatched() {
        let deck = build_deck(&words(3), None);
        assert!(deck.iter().all(|t| !t.flipped && !t.matched));
    }
}
