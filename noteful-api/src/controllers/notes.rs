//! Notes REST API
//!
//! Every note belongs to a folder: creating a note, moving it with an update,
//! and listing a folder's notes all check that the folder exists first.

use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;

use super::{
    bad_request, internal_error, location, not_found, parse_id, parse_update_body,
    FOLDER_NOT_FOUND, INVALID_DATA, INVALID_FOLDER_ID, NOTE_NOT_FOUND,
};
use crate::models::{CreateNoteRequest, Note, NoteResponse, UpdateNoteRequest};
use crate::AppState;

const NO_NOTE_FIELDS: &str = "Invalid data, must update at least 1 field.";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/notes")
            .route(web::get().to(list_notes))
            .route(web::post().to(create_note)),
    );
    cfg.service(
        web::resource("/api/notes/from-folder/{folder_id}").route(web::get().to(list_folder_notes)),
    );
    cfg.service(
        web::resource("/api/notes/{note_id}")
            .route(web::get().to(get_note))
            .route(web::patch().to(update_note))
            .route(web::delete().to(delete_note)),
    );
}

fn resolve_note(state: &AppState, raw_id: &str) -> Result<Note, HttpResponse> {
    let Some(id) = parse_id(raw_id) else {
        return Err(not_found(NOTE_NOT_FOUND));
    };

    match state.db.get_note(id) {
        Ok(Some(note)) => Ok(note),
        Ok(None) => Err(not_found(NOTE_NOT_FOUND)),
        Err(e) => Err(internal_error("Failed to get note", &e)),
    }
}

/// Referenced folder must exist; answers 400 rather than 404 because the
/// request body, not the path, is at fault
fn check_folder_reference(state: &AppState, folder_id: i64) -> Result<(), HttpResponse> {
    match state.db.get_folder(folder_id) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(bad_request(INVALID_FOLDER_ID)),
        Err(e) => Err(internal_error("Failed to check folder", &e)),
    }
}

fn sanitized(notes: Vec<Note>) -> Vec<NoteResponse> {
    notes.into_iter().map(Into::into).collect()
}

async fn list_notes(state: web::Data<AppState>) -> impl Responder {
    match state.db.list_notes() {
        Ok(notes) => HttpResponse::Ok().json(sanitized(notes)),
        Err(e) => internal_error("Failed to list notes", &e),
    }
}

async fn list_folder_notes(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let Some(folder_id) = parse_id(&path) else {
        return not_found(FOLDER_NOT_FOUND);
    };

    match state.db.get_folder(folder_id) {
        Ok(Some(_)) => {}
        Ok(None) => return not_found(FOLDER_NOT_FOUND),
        Err(e) => return internal_error("Failed to get folder", &e),
    }

    match state.db.list_notes_by_folder(folder_id) {
        Ok(notes) => HttpResponse::Ok().json(sanitized(notes)),
        Err(e) => internal_error("Failed to list folder notes", &e),
    }
}

async fn create_note(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    let request = body.into_inner();

    let Some((note_name, folder_id)) = request.required_fields() else {
        return bad_request(INVALID_DATA);
    };

    // Not transactional: the folder can vanish before the insert lands
    if let Err(resp) = check_folder_reference(&state, folder_id) {
        return resp;
    }

    let modified = request.modified.unwrap_or_else(Utc::now);
    let content = request.content.as_deref().unwrap_or_default();

    match state.db.create_note(note_name, modified, content, folder_id) {
        Ok(note) => {
            log::info!("[NOTES] Created note {} in folder {}", note.id, folder_id);
            HttpResponse::Created()
                .insert_header((header::LOCATION, location(&req, note.id)))
                .json(NoteResponse::from(note))
        }
        Err(e) => internal_error("Failed to create note", &e),
    }
}

async fn get_note(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match resolve_note(&state, &path) {
        Ok(note) => HttpResponse::Ok().json(NoteResponse::from(note)),
        Err(resp) => resp,
    }
}

async fn update_note(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    let note = match resolve_note(&state, &path) {
        Ok(note) => note,
        Err(resp) => return resp,
    };

    let changes: UpdateNoteRequest = match parse_update_body(&body) {
        Ok(changes) => changes,
        Err(resp) => return resp,
    };
    if changes.is_empty() {
        return bad_request(NO_NOTE_FIELDS);
    }
    if !changes.has_valid_name() {
        return bad_request(INVALID_DATA);
    }
    if let Some(folder_id) = changes.folder_id {
        if let Err(resp) = check_folder_reference(&state, folder_id) {
            return resp;
        }
    }

    match state.db.update_note(note.id, &changes) {
        Ok(_) => {
            log::info!("[NOTES] Updated note {}", note.id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => internal_error("Failed to update note", &e),
    }
}

async fn delete_note(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let note = match resolve_note(&state, &path) {
        Ok(note) => note,
        Err(resp) => return resp,
    };

    match state.db.delete_note(note.id) {
        // Existing clients expect 201 here
        Ok(_) => {
            log::info!("[NOTES] Deleted note {}", note.id);
            HttpResponse::Created().finish()
        }
        Err(e) => internal_error("Failed to delete note", &e),
    }
}
