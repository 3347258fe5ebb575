//! Multiple-choice option generation.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::Word;

/// Number of options a multiple-choice question aims for.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// An order-randomized option list with exactly one correct answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceSet {
    pub options: Vec<String>,
    pub correct_index: usize,
    pub correct_answer: String,
}

impl ChoiceSet {
    /// Build the option set for `target` against a word pool.
    ///
    /// Picks `k - 1` distinct wrong translations at random, without
    /// replacement, from pool entries other than the target, then inserts
    /// the correct answer at a random position. A pool with fewer eligible
    /// entries degrades to fewer options rather than failing.
    pub fn build(target: &Word, pool: &[Word], k: usize) -> Self {
        let mut rng = rand::thread_rng();
        let correct = target.translation.clone();

        let mut candidates: Vec<&str> = pool
            .iter()
            .filter(|w| w.id != target.id)
            .map(|w| w.translation.as_str())
            .filter(|t| !t.is_empty() && *t != correct)
            .collect();
        candidates.shuffle(&mut rng);

        let mut options: Vec<String> = Vec::with_capacity(k);
        for candidate in candidates {
            if options.len() + 1 == k {
                break;
            }
            if !options.iter().any(|o| o == candidate) {
                options.push(candidate.to_string());
            }
        }

        let correct_index = rng.gen_range(0..=options.len());
        options.insert(correct_index, correct.clone());

        Self {
            options,
            correct_index,
            correct_answer: correct,
        }
    }

    /// Whether a picked option is the correct one.
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }
}
