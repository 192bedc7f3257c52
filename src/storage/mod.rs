pub mod sqlite;

pub use sqlite::SqliteRepository;

use crate::model::{Course, GameSession, NewCourse, NewPlayer, Player, RoundResult};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::new(value.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::new(value.to_string())
    }
}

pub trait CourseRepository: Send + Sync {
    /// All courses, ordered by name.
    fn list_courses(&self) -> Result<Vec<Course>, StorageError>;
    fn get_course(&self, course_id: i64) -> Result<Course, StorageError>;
    fn create_course(&self, new_course: &NewCourse) -> Result<Course, StorageError>;
    fn update_course(&self, course: &Course) -> Result<(), StorageError>;
    fn delete_course(&self, course_id: i64) -> Result<(), StorageError>;
}

pub trait PlayerRepository: Send + Sync {
    /// All players, ordered by code.
    fn list_players(&self) -> Result<Vec<Player>, StorageError>;
    fn get_player(&self, player_id: i64) -> Result<Player, StorageError>;
    fn create_player(&self, new_player: &NewPlayer) -> Result<Player, StorageError>;
    fn update_player(&self, player: &Player) -> Result<(), StorageError>;
    fn delete_player(&self, player_id: i64) -> Result<(), StorageError>;
}

pub trait SessionRepository: Send + Sync {
    /// Create a session and snapshot each player's handicap into it.
    fn create_session(
        &self,
        course_id: i64,
        date: NaiveDate,
        players: &[Player],
    ) -> Result<i64, StorageError>;
    /// Flatten round results into per-hole rows keyed by
    /// (session, player, hole).
    fn save_round_results(
        &self,
        session_id: i64,
        results: &[RoundResult],
    ) -> Result<(), StorageError>;
    fn get_session(&self, session_id: i64) -> Result<GameSession, StorageError>;
    /// All sessions, newest first, with rounds rebuilt from hole rows.
    fn list_sessions(&self) -> Result<Vec<GameSession>, StorageError>;
}
