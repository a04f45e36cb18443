//! Note database operations

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use crate::db::sqlite::parse_timestamp;
use crate::db::{Database, DbResult};
use crate::models::{Note, UpdateNoteRequest};

const NOTE_COLUMNS: &str = "id, note_name, modified, content, folder_id";

fn note_from_row(row: &Row) -> rusqlite::Result<Note> {
    let modified: String = row.get(2)?;
    Ok(Note {
        id: row.get(0)?,
        note_name: row.get(1)?,
        modified: parse_timestamp(2, &modified)?,
        content: row.get(3)?,
        folder_id: row.get(4)?,
    })
}

impl Database {
    /// List every note
    pub fn list_notes(&self) -> DbResult<Vec<Note>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY id"))?;
        let notes = stmt
            .query_map([], note_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    /// List the notes filed under a folder
    pub fn list_notes_by_folder(&self, folder_id: i64) -> DbResult<Vec<Note>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE folder_id = ?1 ORDER BY id"
        ))?;
        let notes = stmt
            .query_map(params![folder_id], note_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    /// Get a note by ID
    pub fn get_note(&self, id: i64) -> DbResult<Option<Note>> {
        let conn = self.conn()?;
        let note = conn
            .query_row(
                &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
                params![id],
                note_from_row,
            )
            .optional()?;
        Ok(note)
    }

    /// Insert a note and return the stored row with its assigned ID.
    ///
    /// The caller is responsible for checking that `folder_id` exists.
    pub fn create_note(
        &self,
        note_name: &str,
        modified: DateTime<Utc>,
        content: &str,
        folder_id: i64,
    ) -> DbResult<Note> {
        let conn = self.conn()?;
        let note = conn.query_row(
            &format!(
                "INSERT INTO notes (note_name, modified, content, folder_id)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING {NOTE_COLUMNS}"
            ),
            params![note_name, modified.to_rfc3339(), content, folder_id],
            note_from_row,
        )?;
        Ok(note)
    }

    /// Apply the supplied fields to a note. Returns false if no row matched.
    pub fn update_note(&self, id: i64, changes: &UpdateNoteRequest) -> DbResult<bool> {
        let conn = self.conn()?;
        let count = conn.execute(
            "UPDATE notes
             SET note_name = COALESCE(?1, note_name),
                 modified = COALESCE(?2, modified),
                 content = COALESCE(?3, content),
                 folder_id = COALESCE(?4, folder_id)
             WHERE id = ?5",
            params![
                changes.note_name,
                changes.modified.map(|m| m.to_rfc3339()),
                changes.content,
                changes.folder_id,
                id
            ],
        )?;
        Ok(count > 0)
    }

    /// Delete a note
    pub fn delete_note(&self, id: i64) -> DbResult<bool> {
        let conn = self.conn()?;
        let count = conn.execute("DELETE FROM notes WHERE id = ?1", params![id])?;
        Ok(count > 0)
    }
}
