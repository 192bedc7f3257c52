#![allow(dead_code)]

use golf_scorecard::model::{
    Course, HoleResult, NewCourse, NewPlayer, Player, RoundResult, StrokeIndexes, TeeColor, HOLES,
};
use golf_scorecard::score::assemble_round_result;

/// Par layout summing to 72, 36 out and 36 in.
pub fn par_values() -> Vec<i32> {
    vec![4, 5, 3, 4, 4, 5, 4, 3, 4, 4, 3, 5, 4, 4, 3, 5, 4, 4]
}

/// Blue tees: stroke index equals hole number, which makes expected
/// allocations easy to reason about in tests.
pub fn sequential_indexes() -> Vec<i32> {
    (1..=HOLES as i32).collect()
}

pub fn reversed_indexes() -> Vec<i32> {
    (1..=HOLES as i32).rev().collect()
}

pub fn rotated_indexes() -> Vec<i32> {
    let mut indexes: Vec<i32> = (10..=HOLES as i32).collect();
    indexes.extend(1..=9);
    indexes
}

pub fn stroke_indexes() -> StrokeIndexes {
    StrokeIndexes {
        blue: sequential_indexes(),
        white: reversed_indexes(),
        red: rotated_indexes(),
    }
}

pub fn sample_course() -> Course {
    Course::new(1, "Pine Hollow".to_string(), par_values(), stroke_indexes())
        .expect("sample course is valid")
}

pub fn sample_new_course(name: &str) -> NewCourse {
    NewCourse {
        name: name.to_string(),
        par: par_values(),
        handicaps: stroke_indexes(),
    }
}

pub fn sample_player(id: i64, handicap: i32, tee_color: TeeColor) -> Player {
    Player::new(
        id,
        format!("First{id}"),
        format!("Last{id}"),
        format!("P{id}"),
        handicap,
        tee_color,
    )
    .expect("sample player is valid")
}

pub fn sample_new_player(code: &str, handicap: i32) -> NewPlayer {
    NewPlayer {
        first_name: "Ada".to_string(),
        last_name: "Fairway".to_string(),
        code: code.to_string(),
        handicap,
        tee_color: TeeColor::White,
    }
}

/// Round with prescribed net strokes per hole; gross mirrors net and
/// every hole takes two putts. Handy for driving the match-play
/// comparator directly.
pub fn round_with_nets(player_id: i64, nets: &[i32; HOLES]) -> RoundResult {
    let hole_results = nets
        .iter()
        .enumerate()
        .map(|(i, net)| HoleResult {
            hole: (i + 1) as i32,
            strokes: *net,
            putts: 2,
            net_strokes: *net,
        })
        .collect();
    assemble_round_result(player_id, hole_results)
}
