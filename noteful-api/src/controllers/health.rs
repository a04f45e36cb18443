use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/health").route(web::get().to(health_check)));
}

/// Reports "ok" only when a store connection can be checked out
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    match state.db.conn() {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "version": VERSION
        })),
        Err(e) => {
            log::error!("Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unavailable",
                "version": VERSION
            }))
        }
    }
}
