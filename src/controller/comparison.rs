use crate::controller::{bad_request, blocking, html_response, wants_json};
use crate::score::create_comparison;
use crate::storage::{SessionRepository, SqliteRepository};
use crate::view::comparison::render_comparison;
use actix_web::web::{Data, Query};
use actix_web::HttpResponse;
use std::collections::HashMap;

fn parse_id(query: &HashMap<String, String>, key: &str) -> Result<i64, String> {
    query
        .get(key)
        .ok_or_else(|| format!("missing query parameter: {key}"))?
        .parse::<i64>()
        .map_err(|e| format!("bad {key}: {e}"))
}

/// GET /comparison?session=&player1=&player2=
pub async fn compare(
    repo: Data<SqliteRepository>,
    query: Query<HashMap<String, String>>,
) -> HttpResponse {
    let (session_id, player1_id, player2_id) = match (
        parse_id(&query, "session"),
        parse_id(&query, "player1"),
        parse_id(&query, "player2"),
    ) {
        (Ok(s), Ok(p1), Ok(p2)) => (s, p1, p2),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => return bad_request(e),
    };

    let repo = repo.get_ref().clone();
    let session = match blocking(move || repo.get_session(session_id)).await {
        Ok(session) => session,
        Err(e) => return HttpResponse::NotFound().body(e.to_string()),
    };

    let (Some(player1), Some(player2)) = (session.player(player1_id), session.player(player2_id))
    else {
        return HttpResponse::NotFound().body("player not in session");
    };
    let (Some(result1), Some(result2)) = (
        session.result_for(player1_id),
        session.result_for(player2_id),
    ) else {
        return HttpResponse::NotFound().body("round results not recorded for both players");
    };

    let comparison = create_comparison(player1, player2, result1, result2);
    if wants_json(&query) {
        HttpResponse::Ok().json(comparison)
    } else {
        html_response(render_comparison(&comparison))
    }
}
