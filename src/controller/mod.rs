pub mod comparison;
pub mod courses;
pub mod db_prefill;
pub mod history;
pub mod players;
pub mod scores;

use crate::storage::StorageError;
use actix_web::{web, HttpResponse};
use std::collections::HashMap;

/// Runs a synchronous repository call on the blocking thread pool so
/// sqlite I/O never stalls an actix worker.
pub(crate) async fn blocking<T, F>(call: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    web::block(call)
        .await
        .map_err(|e| StorageError::new(format!("blocking call failed: {e}")))?
}

/// Handlers render HTML by default and JSON when `json=true` is in the
/// query string.
#[must_use]
pub fn wants_json(query: &HashMap<String, String>) -> bool {
    query.get("json").is_some_and(|v| v == "true")
}

pub(crate) fn html_response(markup: maud::Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub(crate) fn bad_request(err: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().body(err.to_string())
}
