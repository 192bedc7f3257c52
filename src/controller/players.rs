use crate::controller::{bad_request, blocking};
use crate::model::{NewPlayer, Player};
use crate::storage::{PlayerRepository, SqliteRepository};
use actix_web::web::{Data, Json, Path};
use actix_web::HttpResponse;

pub async fn list(repo: Data<SqliteRepository>) -> HttpResponse {
    let repo = repo.get_ref().clone();
    match blocking(move || repo.list_players()).await {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub async fn create(repo: Data<SqliteRepository>, body: Json<NewPlayer>) -> HttpResponse {
    let new_player = body.into_inner();
    if let Err(e) = new_player.validate() {
        return bad_request(e);
    }
    let repo = repo.get_ref().clone();
    match blocking(move || repo.create_player(&new_player)).await {
        Ok(player) => HttpResponse::Created().json(player),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub async fn update(
    repo: Data<SqliteRepository>,
    path: Path<i64>,
    body: Json<Player>,
) -> HttpResponse {
    let mut player = body.into_inner();
    player.id = path.into_inner();
    if let Err(e) = player.validate() {
        return bad_request(e);
    }
    let repo = repo.get_ref().clone();
    let stored = player.clone();
    match blocking(move || repo.update_player(&stored)).await {
        Ok(()) => HttpResponse::Ok().json(player),
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
    }
}

pub async fn delete(repo: Data<SqliteRepository>, path: Path<i64>) -> HttpResponse {
    let player_id = path.into_inner();
    let repo = repo.get_ref().clone();
    match blocking(move || repo.delete_player(player_id)).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
