mod catalog;
mod commands;
mod db;
mod state;

use commands::catalog::{get_unit, list_units, load_catalog, load_catalog_file, search_words};
use commands::game::{end_session, flip_tile, matching_state, resolve_matching, start_matching};
use commands::quiz::{next_question, quiz_state, start_quiz, submit_answer};
use commands::scores::{high_scores, save_score};
use commands::selftest::{
    advance_self_test, self_test_state, start_self_test, submit_self_test_answer,
};
use commands::settings::{get_category_filter, set_category_filter};
use db::SqliteRepository;
use state::AppState;
use std::path::PathBuf;

fn get_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordgym")
        .join("wordgym.db")
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Ensure data directory exists
    let db_path = get_db_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    // Open database
    let repository = SqliteRepository::open(&db_path).expect("failed to open database");
    let app_state = AppState::new(repository);

    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // Catalog commands
            load_catalog,
            load_catalog_file,
            list_units,
            get_unit,
            search_words,
            // Matching-game commands
            start_matching,
            flip_tile,
            resolve_matching,
            matching_state,
            end_session,
            // Quiz commands
            start_quiz,
            submit_answer,
            next_question,
            quiz_state,
            // Self-test commands
            start_self_test,
            submit_self_test_answer,
            advance_self_test,
            self_test_state,
            // Score commands
            high_scores,
            save_score,
            // Preference commands
            get_category_filter,
            set_category_filter,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
