use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sanitize::escape_text;

/// Folder row as stored
#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub id: i64,
    pub folder_name: String,
    pub modified: DateTime<Utc>,
}

/// Request to create a folder
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFolderRequest {
    pub folder_name: Option<String>,
    pub modified: Option<DateTime<Utc>>,
}

impl CreateFolderRequest {
    /// The folder name if it was supplied and non-empty
    pub fn folder_name(&self) -> Option<&str> {
        self.folder_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Partial update of a folder. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFolderRequest {
    pub folder_name: Option<String>,
    pub modified: Option<DateTime<Utc>>,
}

impl UpdateFolderRequest {
    pub fn is_empty(&self) -> bool {
        self.folder_name.is_none() && self.modified.is_none()
    }

    /// A supplied name must not be blank
    pub fn has_valid_name(&self) -> bool {
        self.folder_name.as_deref().is_none_or(|name| !name.is_empty())
    }
}

/// Folder as returned to clients, with `folder_name` HTML-escaped
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FolderResponse {
    pub id: i64,
    pub folder_name: String,
    #[serde(serialize_with = "super::serialize_millis")]
    pub modified: DateTime<Utc>,
}

impl From<Folder> for FolderResponse {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            folder_name: escape_text(&folder.folder_name),
            modified: folder.modified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_empty_name() {
        let req: CreateFolderRequest = serde_json::from_str(r#"{"folder_name": ""}"#).unwrap();
        assert!(req.folder_name().is_none());

        let req: CreateFolderRequest = serde_json::from_str("{}").unwrap();
        assert!(req.folder_name().is_none());

        let req: CreateFolderRequest = serde_json::from_str(r#"{"folder_name": "Spangley"}"#).unwrap();
        assert_eq!(req.folder_name(), Some("Spangley"));
    }

    #[test]
    fn test_update_request_presence() {
        let req: UpdateFolderRequest = serde_json::from_str(r#"{"folder_name": null}"#).unwrap();
        assert!(req.is_empty());

        let req: UpdateFolderRequest =
            serde_json::from_str(r#"{"modified": "2019-01-03T00:00:00.000Z"}"#).unwrap();
        assert!(!req.is_empty());
        assert!(req.has_valid_name());

        let req: UpdateFolderRequest = serde_json::from_str(r#"{"folder_name": ""}"#).unwrap();
        assert!(!req.is_empty());
        assert!(!req.has_valid_name());
    }

    #[test]
    fn test_response_escapes_name() {
        let folder = Folder {
            id: 7,
            folder_name: "<b>Super</b>".to_string(),
            modified: Utc::now(),
        };
        let response: FolderResponse = folder.clone().into();
        assert_eq!(response.id, 7);
        assert_eq!(response.folder_name, "&lt;b&gt;Super&lt;/b&gt;");
        assert_eq!(response.modified, folder.modified);
    }
}
