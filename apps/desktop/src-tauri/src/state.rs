//! Application state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;
use uuid::Uuid;

use wordgym_core::{MatchSession, QuizSession, SelfTestSession};

use crate::catalog::CatalogSlot;
use crate::db::SqliteRepository;

/// A matching session together with its pending reveal-pause task, if any.
pub struct MatchEntry {
    pub session: MatchSession,
    pub pending_resolve: Option<tauri::async_runtime::JoinHandle<()>>,
}

impl MatchEntry {
    pub fn new(session: MatchSession) -> Self {
        Self {
            session,
            pending_resolve: None,
        }
    }

    /// Cancel a scheduled resolve; a discarded session must never be
    /// mutated by a late timer.
    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_resolve.take() {
            handle.abort();
        }
    }
}

/// Active sessions, keyed by the id handed to the frontend.
#[derive(Default)]
pub struct SessionTable {
    pub matching: HashMap<Uuid, MatchEntry>,
    pub quizzes: HashMap<Uuid, QuizSession>,
    pub self_tests: HashMap<Uuid, SelfTestSession>,
}

/// Global application state.
pub struct AppState {
    pub repository: Arc<Mutex<SqliteRepository>>,
    pub catalog: Arc<AsyncMutex<CatalogSlot>>,
    pub sessions: Arc<Mutex<SessionTable>>,
}

impl AppState {
    pub fn new(repository: SqliteRepository) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
            catalog: Arc::new(AsyncMutex::new(CatalogSlot::default())),
            sessions: Arc::new(Mutex::new(SessionTable::default())),
        }
    }
}
