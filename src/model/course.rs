use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every computation in this crate assumes a full 18-hole course.
pub const HOLES: usize = 18;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TeeColor {
    Blue,
    White,
    Red,
}

impl TeeColor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TeeColor::Blue => "blue",
            TeeColor::White => "white",
            TeeColor::Red => "red",
        }
    }
}

impl fmt::Display for TeeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TeeColor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(TeeColor::Blue),
            "white" => Ok(TeeColor::White),
            "red" => Ok(TeeColor::Red),
            other => Err(CoreError::Parse(format!("unknown tee color: {other}"))),
        }
    }
}

/// One stroke-index ordering per tee color. Index 1 marks the hardest
/// hole, 18 the easiest.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StrokeIndexes {
    pub blue: Vec<i32>,
    pub white: Vec<i32>,
    pub red: Vec<i32>,
}

impl StrokeIndexes {
    #[must_use]
    pub fn for_tee(&self, tee: TeeColor) -> &[i32] {
        match tee {
            TeeColor::Blue => &self.blue,
            TeeColor::White => &self.white,
            TeeColor::Red => &self.red,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub holes: i32,
    pub par: Vec<i32>,
    pub handicaps: StrokeIndexes,
}

/// Course payload before a database id has been assigned.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewCourse {
    pub name: String,
    pub par: Vec<i32>,
    pub handicaps: StrokeIndexes,
}

impl Course {
    /// Build a validated course.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidCourse` if the par or stroke-index
    /// data violates the course invariants.
    pub fn new(id: i64, name: String, par: Vec<i32>, handicaps: StrokeIndexes) -> Result<Self, CoreError> {
        let course = Self {
            id,
            name,
            holes: HOLES as i32,
            par,
            handicaps,
        };
        course.validate()?;
        Ok(course)
    }

    /// Re-check the course invariants, e.g. after loading from storage.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidCourse` on the first violated invariant.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_par(&self.par)?;
        validate_stroke_indexes(&self.handicaps)
    }

    /// Stroke index of a hole (0-based) for the given tee.
    #[must_use]
    pub fn stroke_index(&self, tee: TeeColor, hole_idx: usize) -> i32 {
        self.handicaps.for_tee(tee)[hole_idx]
    }
}

impl NewCourse {
    /// # Errors
    ///
    /// Returns `CoreError::InvalidCourse` if the payload violates the
    /// course invariants.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_par(&self.par)?;
        validate_stroke_indexes(&self.handicaps)
    }
}

/// # Errors
///
/// Returns `CoreError::InvalidCourse` unless `par` has 18 entries, each
/// one of 3, 4 or 5.
pub fn validate_par(par: &[i32]) -> Result<(), CoreError> {
    if par.len() != HOLES {
        return Err(CoreError::InvalidCourse(format!(
            "expected {HOLES} par values, got {}",
            par.len()
        )));
    }
    for (i, p) in par.iter().enumerate() {
        if !(3..=5).contains(p) {
            return Err(CoreError::InvalidCourse(format!(
                "hole {}: par must be 3, 4 or 5, got {p}",
                i + 1
            )));
        }
    }
    Ok(())
}

/// # Errors
///
/// Returns `CoreError::InvalidCourse` unless every tee's stroke indexes
/// are a permutation of 1..=18.
pub fn validate_stroke_indexes(handicaps: &StrokeIndexes) -> Result<(), CoreError> {
    for tee in [TeeColor::Blue, TeeColor::White, TeeColor::Red] {
        let indexes = handicaps.for_tee(tee);
        if indexes.len() != HOLES {
            return Err(CoreError::InvalidCourse(format!(
                "{tee} tee: expected {HOLES} stroke indexes, got {}",
                indexes.len()
            )));
        }
        let mut seen = [false; HOLES];
        for idx in indexes {
            if !(1..=HOLES as i32).contains(idx) {
                return Err(CoreError::InvalidCourse(format!(
                    "{tee} tee: stroke index {idx} out of range 1..=18"
                )));
            }
            let slot = &mut seen[(*idx - 1) as usize];
            if *slot {
                return Err(CoreError::InvalidCourse(format!(
                    "{tee} tee: stroke index {idx} repeated"
                )));
            }
            *slot = true;
        }
    }
    Ok(())
}
