//! HTTP controllers. Each resource exposes a `config` function that registers
//! its routes; shared response helpers live here.

use actix_web::{error::InternalError, web, HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;

pub mod folders;
pub mod health;
pub mod notes;

pub const INVALID_DATA: &str = "Invalid data.";
pub const INVALID_FOLDER_ID: &str = "Folder_id is not valid.";
pub const FOLDER_NOT_FOUND: &str = "Folder does not exist.";
pub const NOTE_NOT_FOUND: &str = "Note does not exist.";
const INTERNAL_ERROR: &str = "Internal server error.";

/// `{"error": {"message": ...}}`
pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": { "message": message }
    })
}

pub fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(error_body(message))
}

pub fn not_found(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(error_body(message))
}

/// Log a store failure and hide its details from the client
pub fn internal_error(context: &str, err: &dyn std::fmt::Display) -> HttpResponse {
    log::error!("{}: {}", context, err);
    HttpResponse::InternalServerError().json(error_body(INTERNAL_ERROR))
}

/// Malformed or mistyped JSON bodies are answered like missing fields
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected JSON payload: {}", err);
        InternalError::from_response(err, bad_request(INVALID_DATA)).into()
    })
}

/// PATCH payload: no body means no fields, a body that does not fit `T` is invalid
pub fn parse_update_body<T>(body: &[u8]) -> Result<T, HttpResponse>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        log::debug!("Rejected update payload: {}", e);
        bad_request(INVALID_DATA)
    })
}

/// Path ids that are not integers cannot match any row
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// `Location` for a resource created under the collection at `req`'s path
pub fn location(req: &HttpRequest, id: i64) -> String {
    format!("{}/{}", req.path().trim_end_matches('/'), id)
}


#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_error_body_shape() {
        assert_eq!(
            error_body(INVALID_DATA),
            serde_json::json!({ "error": { "message": "Invalid data." } })
        );
    }

    #[test]
    fn test_parse_update_body() {
        let empty: crate::models::UpdateNoteRequest = parse_update_body(b"").unwrap();
        assert!(empty.is_empty());

        let parsed: crate::models::UpdateNoteRequest =
            parse_update_body(br#"{"note_name": "Renamed"}"#).unwrap();
        assert_eq!(parsed.note_name.as_deref(), Some("Renamed"));

        let mistyped: Result<crate::models::UpdateNoteRequest, _> =
            parse_update_body(br#"{"note_name": "Renamed", "folder_id": "2"}"#);
        assert_eq!(mistyped.unwrap_err().status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("1.5"), None);
    }

    #[test]
    fn test_location_joins_collection_path() {
        let req = TestRequest::post().uri("/api/folders").to_http_request();
        assert_eq!(location(&req, 4), "/api/folders/4");

        let req = TestRequest::post().uri("/api/notes/").to_http_request();
        assert_eq!(location(&req, 9), "/api/notes/9");
    }
}
