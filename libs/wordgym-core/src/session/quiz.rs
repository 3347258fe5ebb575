//! Question-based sessions: multiple-choice and writing exercises.
//!
//! Both variants always advance past a wrong answer; the session completes
//! only after the last question. Early termination on a mistake belongs to
//! the self-test (see `selftest`).

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::answer::AnswerKey;
use crate::error::{CoreError, Result};
use crate::options::{ChoiceSet, DEFAULT_OPTION_COUNT};
use crate::session::SessionPhase;
use crate::types::Word;

/// Which exercise produced the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizKind {
    MultipleChoice,
    Writing,
}

/// One question, with its response once answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub word: Word,
    /// Option list for multiple-choice questions; `None` in writing mode.
    pub choices: Option<ChoiceSet>,
    key: AnswerKey,
    pub given: Option<String>,
    pub correct: Option<bool>,
}

impl Question {
    /// The accepted answers, for feedback after a wrong response.
    pub fn expected(&self) -> &str {
        self.key.display()
    }
}

/// Result of advancing after the feedback pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advance {
    NextQuestion { index: usize },
    Finished,
}

/// State machine for a multiple-choice or writing run over a word list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    kind: QuizKind,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    phase: SessionPhase,
}

impl QuizSession {
    /// Build a multiple-choice session: questions in shuffled word order,
    /// each with distractors drawn from the same word list.
    pub fn multiple_choice(words: &[Word]) -> Self {
        let questions = shuffled(words)
            .into_iter()
            .map(|word| {
                let choices = ChoiceSet::build(&word, words, DEFAULT_OPTION_COUNT);
                let key = AnswerKey::translations_of(&word);
                Question {
                    word,
                    choices: Some(choices),
                    key,
                    given: None,
                    correct: None,
                }
            })
            .collect();
        Self::new(QuizKind::MultipleChoice, questions)
    }

    /// Build a writing session: the prompt is the translation, the
    /// expected answer the word itself.
    pub fn writing(words: &[Word]) -> Self {
        let questions = shuffled(words)
            .into_iter()
            .map(|word| {
                let key = AnswerKey::word_itself(&word);
                Question {
                    word,
                    choices: None,
                    key,
                    given: None,
                    correct: None,
                }
            })
            .collect();
        Self::new(QuizKind::Writing, questions)
    }

    fn new(kind: QuizKind, questions: Vec<Question>) -> Self {
        Self {
            kind,
            questions,
            current: 0,
            score: 0,
            phase: SessionPhase::NotStarted,
        }
    }

    /// Start the session.
    pub fn begin(&mut self) -> Result<()> {
        if self.phase != SessionPhase::NotStarted {
            return Err(CoreError::SessionCompleted);
        }
        self.phase = if self.questions.is_empty() {
            SessionPhase::Completed
        } else {
            SessionPhase::InProgress
        };
        Ok(())
    }

    /// Submit an answer for the current question and enter the feedback
    /// window. Returns whether the answer was correct.
    pub fn submit(&mut self, answer: &str) -> Result<bool> {
        match self.phase {
            SessionPhase::NotStarted => return Err(CoreError::NotStarted),
            SessionPhase::Completed => return Err(CoreError::SessionCompleted),
            SessionPhase::AwaitingResolution => return Err(CoreError::NotAwaitingAnswer),
            SessionPhase::InProgress => {}
        }

        let question = &mut self.questions[self.current];
        let correct = match (&self.kind, &question.choices) {
            // A picked option is compared against the one correct option.
            (QuizKind::MultipleChoice, Some(choices)) => choices.is_correct(answer.trim()),
            _ => question.key.accepts(answer),
        };

        question.given = Some(answer.trim().to_string());
        question.correct = Some(correct);
        if correct {
            self.score += 1;
        }
        self.phase = SessionPhase::AwaitingResolution;
        Ok(correct)
    }

    /// Move past the feedback window: next question, or completion after
    /// the last one, regardless of correctness.
    pub fn advance(&mut self) -> Result<Advance> {
        if self.phase != SessionPhase::AwaitingResolution {
            return Err(CoreError::NotAwaitingAdvance);
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.phase = SessionPhase::InProgress;
            Ok(Advance::NextQuestion {
                index: self.current,
            })
        } else {
            self.phase = SessionPhase::Completed;
            Ok(Advance::Finished)
        }
    }

    pub fn kind(&self) -> QuizKind {
        self.kind
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }
}

fn shuffled(words: &[Word]) -> Vec<Word> {
    let mut words: Vec<Word> = words.to_vec();
    words.shuffle(&mut rand::thread_rng());
    words
}
