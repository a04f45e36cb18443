//! Folders REST API

use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;

use super::{
    bad_request, internal_error, location, not_found, parse_id, parse_update_body,
    FOLDER_NOT_FOUND, INVALID_DATA,
};
use crate::models::{CreateFolderRequest, Folder, FolderResponse, UpdateFolderRequest};
use crate::AppState;

const NO_FOLDER_FIELDS: &str = "Invalid data, must update folder_name or modified.";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/folders")
            .route(web::get().to(list_folders))
            .route(web::post().to(create_folder)),
    );
    cfg.service(
        web::resource("/api/folders/{folder_id}")
            .route(web::get().to(get_folder))
            .route(web::patch().to(update_folder))
            .route(web::delete().to(delete_folder)),
    );
}

/// Look up the folder named in the path, or build the response to send instead
fn resolve_folder(state: &AppState, raw_id: &str) -> Result<Folder, HttpResponse> {
    let Some(id) = parse_id(raw_id) else {
        return Err(not_found(FOLDER_NOT_FOUND));
    };

    match state.db.get_folder(id) {
        Ok(Some(folder)) => Ok(folder),
        Ok(None) => Err(not_found(FOLDER_NOT_FOUND)),
        Err(e) => Err(internal_error("Failed to get folder", &e)),
    }
}

async fn list_folders(state: web::Data<AppState>) -> impl Responder {
    match state.db.list_folders() {
        Ok(folders) => {
            let response: Vec<FolderResponse> = folders.into_iter().map(Into::into).collect();
            HttpResponse::Ok().json(response)
        }
        Err(e) => internal_error("Failed to list folders", &e),
    }
}

async fn create_folder(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CreateFolderRequest>,
) -> impl Responder {
    let request = body.into_inner();

    let Some(folder_name) = request.folder_name() else {
        return bad_request(INVALID_DATA);
    };
    let modified = request.modified.unwrap_or_else(Utc::now);

    match state.db.create_folder(folder_name, modified) {
        Ok(folder) => {
            log::info!("[FOLDERS] Created folder {}", folder.id);
            HttpResponse::Created()
                .insert_header((header::LOCATION, location(&req, folder.id)))
                .json(FolderResponse::from(folder))
        }
        Err(e) => internal_error("Failed to create folder", &e),
    }
}

async fn get_folder(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match resolve_folder(&state, &path) {
        Ok(folder) => HttpResponse::Ok().json(FolderResponse::from(folder)),
        Err(resp) => resp,
    }
}

/// The body is parsed after the existence check so a missing row wins over a bad payload
async fn update_folder(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    let folder = match resolve_folder(&state, &path) {
        Ok(folder) => folder,
        Err(resp) => return resp,
    };

    let changes: UpdateFolderRequest = match parse_update_body(&body) {
        Ok(changes) => changes,
        Err(resp) => return resp,
    };
    if changes.is_empty() {
        return bad_request(NO_FOLDER_FIELDS);
    }
    if !changes.has_valid_name() {
        return bad_request(INVALID_DATA);
    }

    match state.db.update_folder(folder.id, &changes) {
        Ok(_) => {
            log::info!("[FOLDERS] Updated folder {}", folder.id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => internal_error("Failed to update folder", &e),
    }
}

async fn delete_folder(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let folder = match resolve_folder(&state, &path) {
        Ok(folder) => folder,
        Err(resp) => return resp,
    };

    match state.db.delete_folder(folder.id) {
        // Existing clients expect 201 here
        Ok(_) => {
            log::info!("[FOLDERS] Deleted folder {}", folder.id);
            HttpResponse::Created().finish()
        }
        Err(e) => internal_error("Failed to delete folder", &e),
    }
}
