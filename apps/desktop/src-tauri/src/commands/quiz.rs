//! Quiz Tauri commands (multiple-choice and writing exercises).

use tauri::State;
use uuid::Uuid;

use wordgym_core::types::Word;
use wordgym_core::{Question, QuizKind, QuizSession, SessionPhase};

use super::{current_catalog, CommandError};
use crate::state::AppState;

/// One question as shown to the frontend.
#[derive(Debug, serde::Serialize)]
pub struct QuestionView {
    pub word: Word,
    /// Option list in multiple-choice mode.
    pub options: Option<Vec<String>>,
    pub given: Option<String>,
    pub correct: Option<bool>,
    /// Accepted answers, revealed after a wrong response.
    pub expected: Option<String>,
}

impl QuestionView {
    fn of(question: &Question) -> Self {
        let expected = match question.correct {
            Some(false) => Some(question.expected().to_string()),
            _ => None,
        };
        Self {
            word: question.word.clone(),
            options: question.choices.as_ref().map(|c| c.options.clone()),
            given: question.given.clone(),
            correct: question.correct,
            expected,
        }
    }
}

/// Snapshot of a quiz session.
#[derive(Debug, serde::Serialize)]
pub struct QuizView {
    pub session_id: Uuid,
    pub kind: QuizKind,
    pub phase: SessionPhase,
    pub index: usize,
    pub total: usize,
    pub score: u32,
    pub question: Option<QuestionView>,
}

impl QuizView {
    fn of(session_id: Uuid, session: &QuizSession) -> Self {
        Self {
            session_id,
            kind: session.kind(),
            phase: session.phase(),
            index: session.current_index(),
            total: session.total(),
            score: session.score(),
            question: session.current_question().map(QuestionView::of),
        }
    }
}

/// Start a quiz over a unit's words.
#[tauri::command]
pub async fn start_quiz(
    unit_id: i64,
    kind: QuizKind,
    state: State<'_, AppState>,
) -> Result<QuizView, CommandError> {
    let catalog = current_catalog(&state).await?;
    let unit = catalog.unit(unit_id)?;

    let mut session = match kind {
        QuizKind::MultipleChoice => QuizSession::multiple_choice(&unit.words),
        QuizKind::Writing => QuizSession::writing(&unit.words),
    };
    session.begin()?;

    let session_id = Uuid::new_v4();
    let mut table = state.sessions.lock().expect("sessions lock");
    let view = QuizView::of(session_id, &session);
    table.quizzes.insert(session_id, session);
    Ok(view)
}

/// Submit the answer for the current question.
#[tauri::command]
pub async fn submit_answer(
    session_id: Uuid,
    answer: String,
    state: State<'_, AppState>,
) -> Result<QuizView, CommandError> {
    let mut table = state.sessions.lock().expect("sessions lock");
    let session = table
        .quizzes
        .get_mut(&session_id)
        .ok_or_else(|| CommandError::session_not_found(session_id))?;

    session.submit(&answer)?;
    Ok(QuizView::of(session_id, session))
}

/// Advance past the feedback pause, to the next question or completion.
#[tauri::command]
pub async fn next_question(
    session_id: Uuid,
    state: State<'_, AppState>,
) -> Result<QuizView, CommandError> {
    let mut table = state.sessions.lock().expect("sessions lock");
    let session = table
        .quizzes
        .get_mut(&session_id)
        .ok_or_else(|| CommandError::session_not_found(session_id))?;

    session.advance()?;
    Ok(QuizView::of(session_id, session))
}

/// Current state of a quiz session.
#[tauri::command]
pub async fn quiz_state(
    session_id: Uuid,
    state: State<'_, AppState>,
) -> Result<QuizView, CommandError> {
    let table = state.sessions.lock().expect("sessions lock");
    let session = table
        .quizzes
        .get(&session_id)
        .ok_or_else(|| CommandError::session_not_found(session_id))?;
    Ok(QuizView::of(session_id, session))
}
