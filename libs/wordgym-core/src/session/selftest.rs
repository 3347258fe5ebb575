//! The self-test: type the translation for each word until the first
//! mistake ends the run.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::answer::AnswerKey;
use crate::error::{CoreError, Result};
use crate::session::SessionPhase;
use crate::types::Word;

/// Per-answer record kept for the results screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRecord {
    pub word_id: i64,
    pub given: String,
    pub correct: bool,
}

/// State machine for one self-test run.
///
/// Unlike the quiz variants, the first incorrect answer transitions the
/// session to `Completed` even when unanswered words remain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfTestSession {
    words: Vec<Word>,
    keys: Vec<AnswerKey>,
    current: usize,
    score: u32,
    records: Vec<TestRecord>,
    failed: bool,
    phase: SessionPhase,
}

impl SelfTestSession {
    /// Build a session over a shuffled copy of the word list.
    pub fn new(words: &[Word]) -> Self {
        let mut words: Vec<Word> = words.to_vec();
        words.shuffle(&mut rand::thread_rng());
        let keys = words.iter().map(AnswerKey::translations_of).collect();
        Self {
            words,
            keys,
            current: 0,
            score: 0,
            records: Vec::new(),
            failed: false,
            phase: SessionPhase::NotStarted,
        }
    }

    /// Start the run.
    pub fn begin(&mut self) -> Result<()> {
        if self.phase != SessionPhase::NotStarted {
            return Err(CoreError::SessionCompleted);
        }
        self.phase = if self.words.is_empty() {
            SessionPhase::Completed
        } else {
            SessionPhase::InProgress
        };
        Ok(())
    }

    /// Submit the translation for the current word and enter the feedback
    /// window. Returns whether the answer was accepted.
    pub fn submit(&mut self, answer: &str) -> Result<bool> {
        match self.phase {
            SessionPhase::NotStarted => return Err(CoreError::NotStarted),
            SessionPhase::Completed => return Err(CoreError::SessionCompleted),
            SessionPhase::AwaitingResolution => return Err(CoreError::NotAwaitingAnswer),
            SessionPhase::InProgress => {}
        }

        let correct = self.keys[self.current].accepts(answer);
        self.records.push(TestRecord {
            word_id: self.words[self.current].id,
            given: answer.trim().to_string(),
            correct,
        });
        if correct {
            self.score += 1;
        } else {
            self.failed = true;
        }
        self.phase = SessionPhase::AwaitingResolution;
        Ok(correct)
    }

    /// Move past the feedback window. A wrong answer, or the last word,
    /// ends the run; otherwise the next word comes up.
    pub fn advance(&mut self) -> Result<SessionPhase> {
        if self.phase != SessionPhase::AwaitingResolution {
            return Err(CoreError::NotAwaitingAdvance);
        }

        if self.failed || self.current + 1 >= self.words.len() {
            self.phase = SessionPhase::Completed;
        } else {
            self.current += 1;
            self.phase = SessionPhase::InProgress;
        }
        Ok(self.phase)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.words.get(self.current)
    }

    /// Accepted answers for the current word, for the miss feedback.
    pub fn current_expected(&self) -> Option<&str> {
        self.keys.get(self.current).map(|k| k.display())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.words.len()
    }

    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }
}
