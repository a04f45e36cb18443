mod folder;
mod note;

pub use folder::*;
pub use note::*;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// `modified` always goes out with millisecond precision, e.g. `2019-01-03T00:00:00.000Z`
fn serialize_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modified_serializes_with_millis() {
        let folder = FolderResponse {
            id: 1,
            folder_name: "Important".to_string(),
            modified: DateTime::parse_from_rfc3339("2019-01-03T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&folder).unwrap();
        assert_eq!(json["modified"], "2019-01-03T00:00:00.000Z");
    }
}
