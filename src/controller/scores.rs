use crate::controller::{bad_request, blocking, html_response, wants_json};
use crate::model::{Player, RoundResult};
use crate::score::compute_round_result;
use crate::storage::{CourseRepository, PlayerRepository, SessionRepository, SqliteRepository};
use crate::view::scorecard::render_round_results;
use actix_web::web::{Data, Json, Query};
use actix_web::HttpResponse;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerScoreEntry {
    pub player_id: i64,
    pub strokes: Vec<i32>,
    pub putts: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScoreEntryPayload {
    pub course_id: i64,
    pub date: NaiveDate,
    pub entries: Vec<PlayerScoreEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScoreEntryResponse {
    pub session_id: i64,
    pub results: Vec<RoundResult>,
}

/// Score a full round for every entered player and persist it as one
/// session. Rounds are computed here, server-side; the client only
/// ever submits gross strokes and putts.
pub async fn enter_scores(
    repo: Data<SqliteRepository>,
    query: Query<HashMap<String, String>>,
    body: Json<ScoreEntryPayload>,
) -> HttpResponse {
    let payload = body.into_inner();
    if payload.entries.len() < 2 {
        return bad_request("a session needs at least two players");
    }

    let lookup = repo.get_ref().clone();
    let course_id = payload.course_id;
    let player_ids: Vec<i64> = payload.entries.iter().map(|e| e.player_id).collect();
    let loaded = blocking(move || {
        let course = lookup.get_course(course_id)?;
        let players = player_ids
            .iter()
            .map(|id| lookup.get_player(*id))
            .collect::<Result<Vec<Player>, _>>()?;
        Ok((course, players))
    })
    .await;
    let (course, players) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => return HttpResponse::NotFound().body(e.to_string()),
    };

    let mut results: Vec<RoundResult> = Vec::with_capacity(payload.entries.len());
    for (entry, player) in payload.entries.iter().zip(&players) {
        match compute_round_result(player, &course, &entry.strokes, &entry.putts) {
            Ok(result) => results.push(result),
            Err(e) => return bad_request(e),
        }
    }

    let store = repo.get_ref().clone();
    let stored_players = players.clone();
    let stored_results = results.clone();
    let date = payload.date;
    let session_id = match blocking(move || {
        let session_id = store.create_session(course_id, date, &stored_players)?;
        store.save_round_results(session_id, &stored_results)?;
        Ok(session_id)
    })
    .await
    {
        Ok(session_id) => session_id,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };

    if wants_json(&query) {
        HttpResponse::Ok().json(ScoreEntryResponse {
            session_id,
            results,
        })
    } else {
        html_response(render_round_results(&course, &players, &results))
    }
}
