//! Self-test Tauri commands.

use tauri::State;
use uuid::Uuid;

use wordgym_core::types::Word;
use wordgym_core::{SelfTestSession, SessionPhase, TestRecord};

use super::{current_catalog, CommandError};
use crate::state::AppState;

/// Snapshot of a self-test run.
#[derive(Debug, serde::Serialize)]
pub struct SelfTestView {
    pub session_id: Uuid,
    pub phase: SessionPhase,
    pub index: usize,
    pub total: usize,
    pub score: u32,
    pub word: Option<Word>,
    /// Accepted answers for the current word, revealed after a miss.
    pub expected: Option<String>,
    pub records: Vec<TestRecord>,
}

impl SelfTestView {
    fn of(session_id: Uuid, session: &SelfTestSession) -> Self {
        let missed = session
            .records()
            .last()
            .map(|r| !r.correct)
            .unwrap_or(false);
        let expected = if missed && session.phase() != SessionPhase::InProgress {
            session.current_expected().map(str::to_string)
        } else {
            None
        };
        Self {
            session_id,
            phase: session.phase(),
            index: session.current_index(),
            total: session.total(),
            score: session.score(),
            word: session.current_word().cloned(),
            expected,
            records: session.records().to_vec(),
        }
    }
}

/// Start a self-test over one unit, or over the whole catalog when no
/// unit id is given.
#[tauri::command]
pub async fn start_self_test(
    unit_id: Option<i64>,
    state: State<'_, AppState>,
) -> Result<SelfTestView, CommandError> {
    let catalog = current_catalog(&state).await?;
    let unit = match unit_id {
        Some(id) => catalog.unit(id)?,
        None => catalog.all_words_unit(),
    };

    let mut session = SelfTestSession::new(&unit.words);
    session.begin()?;

    let session_id = Uuid::new_v4();
    let mut table = state.sessions.lock().expect("sessions lock");
    let view = SelfTestView::of(session_id, &session);
    table.self_tests.insert(session_id, session);
    Ok(view)
}

/// Submit the translation for the current word.
#[tauri::command]
pub async fn submit_self_test_answer(
    session_id: Uuid,
    answer: String,
    state: State<'_, AppState>,
) -> Result<SelfTestView, CommandError> {
    let mut table = state.sessions.lock().expect("sessions lock");
    let session = table
        .self_tests
        .get_mut(&session_id)
        .ok_or_else(|| CommandError::session_not_found(session_id))?;

    session.submit(&answer)?;
    Ok(SelfTestView::of(session_id, session))
}

/// Advance past the feedback pause. After a miss this completes the run.
#[tauri::command]
pub async fn advance_self_test(
    session_id: Uuid,
    state: State<'_, AppState>,
) -> Result<SelfTestView, CommandError> {
    let mut table = state.sessions.lock().expect("sessions lock");
    let session = table
        .self_tests
        .get_mut(&session_id)
        .ok_or_else(|| CommandError::session_not_found(session_id))?;

    session.advance()?;
    Ok(SelfTestView::of(session_id, session))
}

/// Current state of a self-test run.
#[tauri::command]
pub async fn self_test_state(
    session_id: Uuid,
    state: State<'_, AppState>,
) -> Result<SelfTestView, CommandError> {
    let table = state.sessions.lock().expect("sessions lock");
    let session = table
        .self_tests
        .get(&session_id)
        .ok_or_else(|| CommandError::session_not_found(session_id))?;
    Ok(SelfTestView::of(session_id, session))
}
