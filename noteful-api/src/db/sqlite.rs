//! SQLite-backed store shared by every request handler.
//!
//! `Database` owns an r2d2 pool and bootstraps the `folders` and `notes`
//! tables on open. Per-table queries live in `db::tables`.

use chrono::{DateTime, Utc};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use thiserror::Error;

pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

pub type DbResult<T> = Result<T, DbError>;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS folders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        folder_name TEXT NOT NULL,
        modified TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS notes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        note_name TEXT NOT NULL,
        modified TEXT NOT NULL,
        content TEXT NOT NULL DEFAULT '',
        folder_id INTEGER NOT NULL REFERENCES folders(id)
    );

    CREATE INDEX IF NOT EXISTS idx_notes_folder_id ON notes(folder_id);
";

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database at `database_url` and make sure the tables exist.
    ///
    /// `:memory:` gives a private database held by a single pooled connection
    /// that is never recycled, so every checkout sees the same data.
    pub fn new(database_url: &str) -> DbResult<Self> {
        let pool = if database_url == ":memory:" {
            Pool::builder()
                .max_size(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .build(SqliteConnectionManager::memory())?
        } else {
            if let Some(parent) = Path::new(database_url).parent() {
                if !parent.as_os_str().is_empty() {
                    if let Err(e) = std::fs::create_dir_all(parent) {
                        log::warn!("[DB] Could not create {}: {}", parent.display(), e);
                    }
                }
            }
            Pool::builder().build(SqliteConnectionManager::file(database_url))?
        };

        let db = Self { pool };
        db.init_tables()?;
        Ok(db)
    }

    /// Check out a pooled connection.
    ///
    /// Release it before calling another `Database` method: an in-memory
    /// database has exactly one connection.
    pub fn conn(&self) -> DbResult<DbConn> {
        Ok(self.pool.get()?)
    }

    // foreign_keys stays off: deleting a folder leaves its notes in place.
    fn init_tables(&self) -> DbResult<()> {
        let conn = self.conn()?;
        conn.execute_batch(SCHEMA)?;
        log::debug!("[DB] Schema ready");
        Ok(())
    }
}

/// Parse an RFC 3339 `modified` column, reporting bad rows as conversion failures.
pub(crate) fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_database_creates_tables() {
        let db = Database::new(":memory:").expect("Failed to open database");
        let conn = db.conn().unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('folders', 'notes')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_file_database_creates_parent_dir_and_reopens() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("noteful.db");
        let url = db_path.to_str().unwrap();

        {
            let db = Database::new(url).expect("Failed to open database");
            db.conn()
                .unwrap()
                .execute(
                    "INSERT INTO folders (folder_name, modified) VALUES ('Important', '2019-01-03T00:00:00Z')",
                    [],
                )
                .unwrap();
        }

        assert!(db_path.exists());

        // Schema bootstrap is idempotent and data survives
        let db = Database::new(url).expect("Failed to reopen database");
        let count: i64 = db
            .conn()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM folders", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_parse_timestamp() {
        let parsed = parse_timestamp(0, "2019-01-03T00:00:00.000Z").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2019-01-03T00:00:00+00:00");

        assert!(parse_timestamp(2, "yesterday").is_err());
    }
}
