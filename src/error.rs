use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("db error: {0}")]
    Db(String),
    #[error("invalid course: {0}")]
    InvalidCourse(String),
    #[error("invalid player: {0}")]
    InvalidPlayer(String),
    #[error("invalid scorecard: {0}")]
    InvalidScorecard(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        Self::Db(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
