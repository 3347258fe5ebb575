//! Fixture data for API tests.

use wordgym_core::types::{Unit, Word};
use wordgym_core::Catalog;

pub fn word(id: i64, word: &str, translation: &str) -> Word {
    Word {
        id,
        word: word.to_string(),
        translation: translation.to_string(),
        translations: Vec::new(),
        definition: format!("definition of {}", word),
        meaning: format!("meaning of {}", word),
        examples: vec![format!("An example with {}.", word)],
    }
}

/// Catalog with a pairable unit 3 on both skill tracks and an unpaired
/// Reading & Writing unit 4.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Unit::from_raw(
            1,
            "Reading & Writing Unit 3".to_string(),
            vec![
                word(1, "abandon", "terk etmek"),
                word(2, "benefit", "fayda"),
                word(3, "consist", "oluşmak"),
                word(4, "deny", "inkar etmek"),
                word(5, "expand", "genişletmek"),
            ],
        ),
        Unit::from_raw(
            2,
            "Listening & Speaking Unit 3".to_string(),
            vec![
                word(6, "fluent", "akıcı"),
                word(7, "gesture", "jest"),
                word(8, "mention", "bahsetmek"),
                word(9, "pause", "duraklamak"),
            ],
        ),
        Unit::from_raw(
            3,
            "Reading & Writing Unit 4".to_string(),
            vec![word(10, "survey", "anket")],
        ),
    ])
}
