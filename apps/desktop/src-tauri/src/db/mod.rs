//! Local SQLite persistence: high scores and preferences.

mod error;
mod repository;
mod schema;

pub use error::DbError;
pub use repository::{
    PreferenceRepository, ScoreRepository, SqliteRepository, CATEGORY_FILTER_KEY,
};
