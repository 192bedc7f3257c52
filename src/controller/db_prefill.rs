use crate::error::CoreError;
use crate::model::{NewCourse, NewPlayer};
use crate::storage::{CourseRepository, PlayerRepository, SqliteRepository};
use serde_json::Value;

/// Seed reference data from a JSON file at startup.
///
/// Format:
/// `{ "courses": [NewCourse, ...], "players": [NewPlayer, ...] }`
///
/// Idempotent: courses already present (by name) and players already
/// present (by code) are skipped, so re-running against a populated
/// database is safe.
///
/// # Errors
///
/// Returns `CoreError` if the JSON does not match the expected shapes,
/// a payload violates a model invariant, or storage fails.
pub fn db_prefill(json: &Value, repo: &SqliteRepository) -> Result<(), CoreError> {
    if let Some(courses) = json.get("courses") {
        let new_courses: Vec<NewCourse> = serde_json::from_value(courses.clone())?;
        let existing = repo.list_courses()?;
        for new_course in new_courses {
            if existing.iter().any(|c| c.name == new_course.name) {
                continue;
            }
            new_course.validate()?;
            repo.create_course(&new_course)?;
        }
    }

    if let Some(players) = json.get("players") {
        let new_players: Vec<NewPlayer> = serde_json::from_value(players.clone())?;
        let existing = repo.list_players()?;
        for new_player in new_players {
            if existing.iter().any(|p| p.code == new_player.code) {
                continue;
            }
            new_player.validate()?;
            repo.create_player(&new_player)?;
        }
    }

    Ok(())
}
