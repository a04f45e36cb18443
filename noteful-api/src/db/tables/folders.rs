//! Folder database operations

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use crate::db::sqlite::parse_timestamp;
use crate::db::{Database, DbResult};
use crate::models::{Folder, UpdateFolderRequest};

const FOLDER_COLUMNS: &str = "id, folder_name, modified";

fn folder_from_row(row: &Row) -> rusqlite::Result<Folder> {
    let modified: String = row.get(2)?;
    Ok(Folder {
        id: row.get(0)?,
        folder_name: row.get(1)?,
        modified: parse_timestamp(2, &modified)?,
    })
}

impl Database {
    /// List every folder
    pub fn list_folders(&self) -> DbResult<Vec<Folder>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {FOLDER_COLUMNS} FROM folders ORDER BY id"))?;
        let folders = stmt
            .query_map([], folder_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(folders)
    }

    /// Get a folder by ID
    pub fn get_folder(&self, id: i64) -> DbResult<Option<Folder>> {
        let conn = self.conn()?;
        let folder = conn
            .query_row(
                &format!("SELECT {FOLDER_COLUMNS} FROM folders WHERE id = ?1"),
                params![id],
                folder_from_row,
            )
            .optional()?;
        Ok(folder)
    }

    /// Insert a folder and return the stored row with its assigned ID
    pub fn create_folder(&self, folder_name: &str, modified: DateTime<Utc>) -> DbResult<Folder> {
        let conn = self.conn()?;
        let folder = conn.query_row(
            &format!("INSERT INTO folders (folder_name, modified) VALUES (?1, ?2) RETURNING {FOLDER_COLUMNS}"),
            params![folder_name, modified.to_rfc3339()],
            folder_from_row,
        )?;
        Ok(folder)
    }

    /// Apply the supplied fields to a folder. Returns false if no row matched.
    pub fn update_folder(&self, id: i64, changes: &UpdateFolderRequest) -> DbResult<bool> {
        let conn = self.conn()?;
        let count = conn.execute(
            "UPDATE folders
             SET folder_name = COALESCE(?1, folder_name),
                 modified = COALESCE(?2, modified)
             WHERE id = ?3",
            params![
                changes.folder_name,
                changes.modified.map(|m| m.to_rfc3339()),
                id
            ],
        )?;
        Ok(count > 0)
    }

    /// Delete a folder. Notes pointing at it are left untouched.
    pub fn delete_folder(&self, id: i64) -> DbResult<bool> {
        let conn = self.conn()?;
        let count = conn.execute("DELETE FROM folders WHERE id = ?1", params![id])?;
        Ok(count > 0)
    }
}
