//! Repository pattern for database access.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use wordgym_core::scores::Leaderboard;
use wordgym_core::types::ScoreEntry;

use crate::db::error::DbError;
use crate::db::schema::{SCHEMA, SCHEMA_VERSION};

type Result<T> = std::result::Result<T, DbError>;

/// Preference key for the last-selected unit-category filter.
pub const CATEGORY_FILTER_KEY: &str = "unit_category_filter";

/// Repository for high-score operations.
pub trait ScoreRepository {
    fn load_scores(&self) -> Result<Vec<ScoreEntry>>;
    /// Record one score: load, rank, cap, write back wholesale.
    fn record_score(&self, entry: ScoreEntry) -> Result<Vec<ScoreEntry>>;
}

/// Repository for preference operations.
pub trait PreferenceRepository {
    fn get_preference(&self, key: &str) -> Result<Option<String>>;
    fn set_preference(&self, key: &str, value: &str) -> Result<()>;
    fn clear_preference(&self, key: &str) -> Result<()>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open (creating if needed) the database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// In-memory database, for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        conn.execute(
            "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
            params![SCHEMA_VERSION],
        )?;
        Ok(Self { conn })
    }
}

impl ScoreRepository for SqliteRepository {
    fn load_scores(&self) -> Result<Vec<ScoreEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, score, recorded_at FROM high_scores ORDER BY score DESC, id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, u32>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (name, score, recorded_at) = row?;
            let recorded_at = DateTime::parse_from_rfc3339(&recorded_at)
                .map_err(|e| DbError::InvalidData(format!("bad timestamp: {}", e)))?
                .with_timezone(&Utc);
            entries.push(ScoreEntry {
                name,
                score,
                recorded_at,
            });
        }
        Ok(entries)
    }

    fn record_score(&self, entry: ScoreEntry) -> Result<Vec<ScoreEntry>> {
        let mut board = Leaderboard::from_entries(self.load_scores()?);
        board.record(entry);
        let entries = board.into_entries();

        // The list is small and always written wholesale.
        self.conn.execute("DELETE FROM high_scores", [])?;
        {
            let mut stmt = self.conn.prepare(
                "INSERT INTO high_scores (name, score, recorded_at) VALUES (?1, ?2, ?3)",
            )?;
            for e in &entries {
                stmt.execute(params![e.name, e.score, e.recorded_at.to_rfc3339()])?;
            }
        }
        Ok(entries)
    }
}

impl PreferenceRepository for SqliteRepository {
    fn get_preference(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn clear_preference(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM preferences WHERE key = ?1", params![key])?;
        Ok(())
    }
}
