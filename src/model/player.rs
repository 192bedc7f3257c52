use crate::error::CoreError;
use crate::model::course::TeeColor;
use serde::{Deserialize, Serialize};

/// Largest course handicap the scoring UI accepts.
pub const MAX_HANDICAP: i32 = 54;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub code: String,
    pub handicap: i32,
    pub tee_color: TeeColor,
}

/// Player payload before a database id has been assigned.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub code: String,
    pub handicap: i32,
    pub tee_color: TeeColor,
}

impl Player {
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPlayer` if the handicap is outside
    /// 0..=54.
    pub fn new(
        id: i64,
        first_name: String,
        last_name: String,
        code: String,
        handicap: i32,
        tee_color: TeeColor,
    ) -> Result<Self, CoreError> {
        validate_handicap(handicap)?;
        Ok(Self {
            id,
            first_name,
            last_name,
            code,
            handicap,
            tee_color,
        })
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidPlayer` if the handicap is outside
    /// 0..=54.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_handicap(self.handicap)
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl NewPlayer {
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPlayer` if the handicap is outside
    /// 0..=54.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_handicap(self.handicap)
    }
}

fn validate_handicap(handicap: i32) -> Result<(), CoreError> {
    if (0..=MAX_HANDICAP).contains(&handicap) {
        Ok(())
    } else {
        Err(CoreError::InvalidPlayer(format!(
            "handicap must be within 0..={MAX_HANDICAP}, got {handicap}"
        )))
    }
}
