use crate::model::{HoleWinner, MatchPlayResult, RoundResult, HOLES};

/// Hole-by-hole match play between two rounds.
///
/// Holes must be walked in order: the running status a hole reports
/// depends on every hole before it. The loop never short-circuits once
/// a match is mathematically decided; only the label gains a
/// "(Match Won)"/"(Match Lost)" suffix.
#[must_use]
pub fn compare_match_play(result1: &RoundResult, result2: &RoundResult) -> Vec<MatchPlayResult> {
    let mut match_results = Vec::with_capacity(HOLES);
    // holes up (positive) or down (negative) for player 1
    let mut player1_status: i32 = 0;

    for (i, (h1, h2)) in result1
        .hole_results
        .iter()
        .zip(&result2.hole_results)
        .enumerate()
    {
        let winner = if h1.net_strokes < h2.net_strokes {
            player1_status += 1;
            HoleWinner::Player1
        } else if h1.net_strokes > h2.net_strokes {
            player1_status -= 1;
            HoleWinner::Player2
        } else {
            HoleWinner::Tie
        };

        let holes_remaining = HOLES as i32 - (i as i32 + 1);
        match_results.push(MatchPlayResult {
            hole: (i + 1) as i32,
            player1_net: h1.net_strokes,
            player2_net: h2.net_strokes,
            winner,
            status: status_label(player1_status, holes_remaining),
        });
    }

    match_results
}

/// Cumulative match status over holes 1..=`upto_hole`, phrased from
/// player 1's perspective, with the decided-match suffix applied when
/// the deficit exceeds the holes left after `upto_hole`. With
/// `upto_hole` 18 any non-square match reads "(Match Won)" or
/// "(Match Lost)".
#[must_use]
pub fn status_at_hole(results: &[MatchPlayResult], upto_hole: usize) -> String {
    let upto = upto_hole.min(results.len());
    let player1_status = running_status(&results[..upto]);
    status_label(player1_status, HOLES as i32 - upto_hole as i32)
}

/// Relative status over holes `start_hole..=end_hole` only, restarted
/// from all square. Nine-hole summaries use this, so a player can take
/// the front nine and still read "AS" on the back. No decided-match
/// suffix at this granularity. A window past the recorded holes reads
/// all square.
#[must_use]
pub fn status_over_range(results: &[MatchPlayResult], start_hole: usize, end_hole: usize) -> String {
    let end = end_hole.min(results.len());
    let start = (start_hole - 1).min(end);
    let player1_status = running_status(&results[start..end]);
    if player1_status > 0 {
        format!("{player1_status}UP")
    } else if player1_status < 0 {
        format!("{}DOWN", player1_status.abs())
    } else {
        "AS".to_string()
    }
}

fn running_status(results: &[MatchPlayResult]) -> i32 {
    results
        .iter()
        .map(|r| match r.winner {
            HoleWinner::Player1 => 1,
            HoleWinner::Player2 => -1,
            HoleWinner::Tie => 0,
        })
        .sum()
}

fn status_label(player1_status: i32, holes_remaining: i32) -> String {
    if player1_status > 0 {
        if player1_status > holes_remaining {
            format!("{player1_status}UP (Match Won)")
        } else {
            format!("{player1_status}UP")
        }
    } else if player1_status < 0 {
        let down = player1_status.abs();
        if down > holes_remaining {
            format!("{down}DOWN (Match Lost)")
        } else {
            format!("{down}DOWN")
        }
    } else {
        "AS".to_string()
    }
}
