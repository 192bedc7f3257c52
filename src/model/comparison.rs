use crate::model::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HoleWinner {
    Player1,
    Player2,
    Tie,
}

impl fmt::Display for HoleWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HoleWinner::Player1 => "player1",
            HoleWinner::Player2 => "player2",
            HoleWinner::Tie => "tie",
        };
        write!(f, "{s}")
    }
}

/// Match-play outcome of a single hole. `status` is the running
/// cumulative-from-hole-1 label as of this hole; the nine-hole and
/// final summary labels are recomputed separately and are not simply
/// the last entry of this field.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchPlayResult {
    pub hole: i32,
    pub player1_net: i32,
    pub player2_net: i32,
    pub winner: HoleWinner,
    pub status: String,
}

/// Head-to-head medal decision over one range of holes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinnerDecision {
    pub player1_score: i32,
    pub player2_score: i32,
    pub winner: HoleWinner,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MedalPlaySummary {
    pub front_nine: WinnerDecision,
    pub back_nine: WinnerDecision,
    pub total: WinnerDecision,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchPlaySummary {
    pub hole_results: Vec<MatchPlayResult>,
    pub front_nine_status: String,
    pub back_nine_status: String,
    pub final_status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ComparisonResult {
    pub player1: Player,
    pub player2: Player,
    pub medal_play: MedalPlaySummary,
    pub match_play: MatchPlaySummary,
}
