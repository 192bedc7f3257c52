use crate::model::course::Course;
use crate::model::player::Player;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One hole of one player's round. `net_strokes` is always derived by
/// the stroke allocator, never entered directly.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleResult {
    pub hole: i32,
    pub strokes: i32,
    pub putts: i32,
    pub net_strokes: i32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NineSummary {
    pub strokes: i32,
    pub net_strokes: i32,
    pub putts: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundResult {
    pub player_id: i64,
    pub hole_results: Vec<HoleResult>,
    pub total_strokes: i32,
    pub total_net_strokes: i32,
    pub total_putts: i32,
    pub front_nine: NineSummary,
    pub back_nine: NineSummary,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GameSession {
    pub id: i64,
    pub course: Course,
    pub date: NaiveDate,
    pub players: Vec<Player>,
    pub results: Vec<RoundResult>,
}

impl GameSession {
    #[must_use]
    pub fn result_for(&self, player_id: i64) -> Option<&RoundResult> {
        self.results.iter().find(|r| r.player_id == player_id)
    }

    #[must_use]
    pub fn player(&self, player_id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }
}
