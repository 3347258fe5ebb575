//! Typed-answer evaluation.

use serde::{Deserialize, Serialize};

use crate::types::Word;

/// The set of answers accepted for one question.
///
/// Comparison is case-insensitive and whitespace-normalized; the accepted
/// strings are normalized once at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerKey {
    accepted: Vec<String>,
    display: String,
}

impl AnswerKey {
    fn from_candidates<'a>(candidates: impl IntoIterator<Item = &'a str>) -> Self {
        let mut accepted = Vec::new();
        let mut display_parts: Vec<String> = Vec::new();
        for candidate in candidates {
            let trimmed = candidate.trim();
            if trimmed.is_empty() {
                continue;
            }
            let normalized = normalize(trimmed);
            if !accepted.contains(&normalized) {
                accepted.push(normalized);
                display_parts.push(trimmed.to_string());
            }
        }
        Self {
            accepted,
            display: display_parts.join(", "),
        }
    }

    /// Accept the word's primary translation and every alternative.
    pub fn translations_of(word: &Word) -> Self {
        let candidates = std::iter::once(word.translation.as_str())
            .chain(word.translations.iter().map(String::as_str));
        Self::from_candidates(candidates)
    }

    /// Accept the word itself (writing mode asks for the word, given its
    /// translation).
    pub fn word_itself(word: &Word) -> Self {
        Self::from_candidates(std::iter::once(word.word.as_str()))
    }

    /// Whether a submitted answer matches any accepted form.
    pub fn accepts(&self, given: &str) -> bool {
        let given = normalize(given);
        !given.is_empty() && self.accepted.iter().any(|a| *a == given)
    }

    /// Human-readable accepted answers, for correctness feedback.
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// Trim, collapse inner whitespace and lowercase.
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Word;
    use pretty_assertions::assert_eq;

    fn word_with_alternatives() -> Word {
        Word {
            id: 1,
            word: "apple".to_string(),
            translation: "elma".to_string(),
            translations: vec!["yeşil elma".to_string(), "Elma".to_string()],
            definition: String::new(),
            meaning: String::new(),
            examples: Vec::new(),
        }
    }

    #[test]
    fn trims_and_case_folds() {
        let key = AnswerKey::translations_of(&word_with_alternatives());
        assert!(key.accepts("elma"));
        assert!(key.accepts("  Elma "));
        assert!(key.accepts("ELMA"));
        assert!(!key.accepts("armut"));
    }

    #[test]
    fn accepts_any_listed_alternative() {
        let key = AnswerKey::translations_of(&word_with_alternatives());
        assert!(key.accepts("yeşil   elma"));
    }

    #[test]
    fn empty_answer_never_matches() {
        let key = AnswerKey::translations_of(&word_with_alternatives());
        assert!(!key.accepts(""));
        assert!(!key.accepts("   "));
    }

    #[test]
    fn word_key_checks_the_word() {
        let key = AnswerKey::word_itself(&word_with_alternatives());
        assert!(key.accepts("Apple "));
        assert!(!key.accepts("elma"));
    }

    #[test]
    fn display_lists_unique_accepted_forms() {
        let key = AnswerKey::translations_of(&word_with_alternatives());
        // "Elma" folds into "elma" and is not repeated.
        assert_eq!(key.display(), "elma, yeşil elma");
    }
}
