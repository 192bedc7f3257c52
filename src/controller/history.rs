use crate::controller::{blocking, html_response, wants_json};
use crate::storage::{SessionRepository, SqliteRepository};
use crate::view::history::render_history;
use actix_web::web::{Data, Query};
use actix_web::HttpResponse;
use std::collections::HashMap;

pub async fn list(
    repo: Data<SqliteRepository>,
    query: Query<HashMap<String, String>>,
) -> HttpResponse {
    let repo = repo.get_ref().clone();
    match blocking(move || repo.list_sessions()).await {
        Ok(sessions) => {
            if wants_json(&query) {
                HttpResponse::Ok().json(sessions)
            } else {
                html_response(render_history(&sessions))
            }
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
