//! Matching-game Tauri commands (memory game and pair-matching exercise).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tauri::State;
use uuid::Uuid;

use wordgym_core::deck::Tile;
use wordgym_core::{build_deck, FlipOutcome, MatchSession, Player, PlayerColor, SessionPhase};

use super::{current_catalog, CommandError};
use crate::state::{AppState, MatchEntry, SessionTable};

/// How long a mismatched pair stays face up before the scheduled resolve.
const REVEAL_PAUSE: Duration = Duration::from_millis(1000);

/// Player setup as entered on the start screen.
#[derive(Debug, serde::Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub color: PlayerColor,
}

/// Snapshot of a matching session for the frontend.
#[derive(Debug, serde::Serialize)]
pub struct MatchingView {
    pub session_id: Uuid,
    pub phase: SessionPhase,
    pub tiles: Vec<Tile>,
    pub players: Vec<Player>,
    pub current_player: usize,
    pub matched_pairs: u32,
    pub winner: Option<Player>,
}

impl MatchingView {
    fn of(session_id: Uuid, session: &MatchSession) -> Self {
        Self {
            session_id,
            phase: session.phase(),
            tiles: session.tiles().to_vec(),
            players: session.players().to_vec(),
            current_player: session.current_player(),
            matched_pairs: session.matched_pairs(),
            winner: session.winner().cloned(),
        }
    }
}

/// Start a matching session over a unit's words.
///
/// `sample` caps the pair count (the pair-matching exercise plays 6, the
/// memory game the whole unit). Blank player names fall back to numbered
/// defaults; color validation stays with the session engine.
#[tauri::command]
pub async fn start_matching(
    unit_id: i64,
    sample: Option<usize>,
    players: Vec<NewPlayer>,
    state: State<'_, AppState>,
) -> Result<MatchingView, CommandError> {
    let catalog = current_catalog(&state).await?;
    let unit = catalog.unit(unit_id)?;

    let players: Vec<Player> = players
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let name = if p.name.trim().is_empty() {
                format!("Player {}", i + 1)
            } else {
                p.name.trim().to_string()
            };
            Player::new(name, p.color)
        })
        .collect();

    let mut session = MatchSession::new(build_deck(&unit.words, sample));
    session.begin(players)?;

    let session_id = Uuid::new_v4();
    let mut table = state.sessions.lock().expect("sessions lock");
    let view = MatchingView::of(session_id, &session);
    table.matching.insert(session_id, MatchEntry::new(session));
    Ok(view)
}

/// Flip a tile.
///
/// When the flip completes a pair, a resolve task is scheduled after the
/// reveal pause; tearing the session down aborts it, so a navigated-away
/// game is never mutated mid-pause.
#[tauri::command]
pub async fn flip_tile(
    session_id: Uuid,
    index: usize,
    state: State<'_, AppState>,
) -> Result<MatchingView, CommandError> {
    let sessions = Arc::clone(&state.sessions);
    let mut table = state.sessions.lock().expect("sessions lock");
    let entry = table
        .matching
        .get_mut(&session_id)
        .ok_or_else(|| CommandError::session_not_found(session_id))?;

    let outcome = entry.session.flip(index)?;

    if matches!(outcome, FlipOutcome::PairPending { .. }) {
        entry.cancel_pending();
        entry.pending_resolve = Some(tauri::async_runtime::spawn(resolve_after_pause(
            sessions, session_id,
        )));
    }

    Ok(MatchingView::of(session_id, &entry.session))
}

async fn resolve_after_pause(sessions: Arc<Mutex<SessionTable>>, session_id: Uuid) {
    tokio::time::sleep(REVEAL_PAUSE).await;
    let mut table = sessions.lock().expect("sessions lock");
    if let Some(entry) = table.matching.get_mut(&session_id) {
        let _ = entry.session.resolve();
        entry.pending_resolve = None;
    }
}

/// Resolve the pending pair immediately (the frontend may cut the pause
/// short, e.g. on an impatient third click). A no-op when the scheduled
/// task already resolved the pair.
#[tauri::command]
pub async fn resolve_matching(
    session_id: Uuid,
    state: State<'_, AppState>,
) -> Result<MatchingView, CommandError> {
    let mut table = state.sessions.lock().expect("sessions lock");
    let entry = table
        .matching
        .get_mut(&session_id)
        .ok_or_else(|| CommandError::session_not_found(session_id))?;

    entry.cancel_pending();
    if entry.session.phase() == SessionPhase::AwaitingResolution {
        entry.session.resolve()?;
    }
    Ok(MatchingView::of(session_id, &entry.session))
}

/// Current state of a matching session.
#[tauri::command]
pub async fn matching_state(
    session_id: Uuid,
    state: State<'_, AppState>,
) -> Result<MatchingView, CommandError> {
    let table = state.sessions.lock().expect("sessions lock");
    let entry = table
        .matching
        .get(&session_id)
        .ok_or_else(|| CommandError::session_not_found(session_id))?;
    Ok(MatchingView::of(session_id, &entry.session))
}

/// Discard a session of any kind (navigating away from its screen).
#[tauri::command]
pub async fn end_session(session_id: Uuid, state: State<'_, AppState>) -> Result<(), CommandError> {
    let mut table = state.sessions.lock().expect("sessions lock");
    if let Some(mut entry) = table.matching.remove(&session_id) {
        entry.cancel_pending();
        return Ok(());
    }
    if table.quizzes.remove(&session_id).is_some() {
        return Ok(());
    }
    if table.self_tests.remove(&session_id).is_some() {
        return Ok(());
    }
    Err(CommandError::session_not_found(session_id))
}
