use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sanitize::escape_text;

/// Note row as stored. `folder_id` may point at a folder deleted after the
/// note was created.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i64,
    pub note_name: String,
    pub modified: DateTime<Utc>,
    pub content: String,
    pub folder_id: i64,
}

/// Request to create a note
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    pub note_name: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub content: Option<String>,
    pub folder_id: Option<i64>,
}

impl CreateNoteRequest {
    /// Name and parent folder, if both were supplied and the name is non-empty
    pub fn required_fields(&self) -> Option<(&str, i64)> {
        let name = self.note_name.as_deref().filter(|name| !name.is_empty())?;
        Some((name, self.folder_id?))
    }
}

/// Partial update of a note. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub note_name: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub content: Option<String>,
    pub folder_id: Option<i64>,
}

impl UpdateNoteRequest {
    pub fn is_empty(&self) -> bool {
        self.note_name.is_none()
            && self.modified.is_none()
            && self.content.is_none()
            && self.folder_id.is_none()
    }

    /// A supplied name must not be blank; content may be cleared
    pub fn has_valid_name(&self) -> bool {
        self.note_name.as_deref().is_none_or(|name| !name.is_empty())
    }
}

/// Note as returned to clients, with `note_name` and `content` HTML-escaped
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteResponse {
    pub id: i64,
    pub note_name: String,
    #[serde(serialize_with = "super::serialize_millis")]
    pub modified: DateTime<Utc>,
    pub content: String,
    pub folder_id: i64,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            note_name: escape_text(&note.note_name),
            modified: note.modified,
            content: escape_text(&note.content),
            folder_id: note.folder_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let req: CreateNoteRequest =
            serde_json::from_str(r#"{"note_name": "Dogs", "folder_id": 1}"#).unwrap();
        assert_eq!(req.required_fields(), Some(("Dogs", 1)));

        let req: CreateNoteRequest = serde_json::from_str(r#"{"note_name": "Dogs"}"#).unwrap();
        assert_eq!(req.required_fields(), None);

        let req: CreateNoteRequest =
            serde_json::from_str(r#"{"note_name": "", "folder_id": 1}"#).unwrap();
        assert_eq!(req.required_fields(), None);
    }

    #[test]
    fn test_update_request_allows_clearing_content() {
        let req: UpdateNoteRequest = serde_json::from_str(r#"{"content": ""}"#).unwrap();
        assert!(!req.is_empty());
        assert!(req.has_valid_name());

        let req: UpdateNoteRequest = serde_json::from_str("{}").unwrap();
        assert!(req.is_empty());
    }

    #[test]
    fn test_response_escapes_name_and_content() {
        let note = Note {
            id: 3,
            note_name: "<script>alert(1)</script>".to_string(),
            modified: Utc::now(),
            content: "a < b && c > d".to_string(),
            folder_id: 2,
        };
        let response: NoteResponse = note.into();
        assert_eq!(response.note_name, "&lt;script&gt;alert(1)&lt;/script&gt;");
        assert_eq!(response.content, "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(response.folder_id, 2);
    }
}
