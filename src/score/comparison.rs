use crate::model::{
    ComparisonResult, HoleWinner, MatchPlaySummary, MedalPlaySummary, Player, RoundResult,
    WinnerDecision, HOLES,
};
use crate::score::match_play::{compare_match_play, status_at_hole, status_over_range};

/// Full head-to-head comparison of two rounds: medal play over front
/// nine, back nine and total, plus hole-by-hole match play with the
/// three summary status strings.
#[must_use]
pub fn create_comparison(
    player1: &Player,
    player2: &Player,
    result1: &RoundResult,
    result2: &RoundResult,
) -> ComparisonResult {
    let match_play_results = compare_match_play(result1, result2);

    ComparisonResult {
        player1: player1.clone(),
        player2: player2.clone(),
        medal_play: MedalPlaySummary {
            front_nine: decide(
                result1.front_nine.net_strokes,
                result2.front_nine.net_strokes,
            ),
            back_nine: decide(result1.back_nine.net_strokes, result2.back_nine.net_strokes),
            total: decide(result1.total_net_strokes, result2.total_net_strokes),
        },
        match_play: MatchPlaySummary {
            front_nine_status: status_over_range(&match_play_results, 1, 9),
            back_nine_status: status_over_range(&match_play_results, 10, HOLES),
            final_status: status_at_hole(&match_play_results, HOLES),
            hole_results: match_play_results,
        },
    }
}

fn decide(player1_score: i32, player2_score: i32) -> WinnerDecision {
    let winner = if player1_score < player2_score {
        HoleWinner::Player1
    } else if player1_score > player2_score {
        HoleWinner::Player2
    } else {
        HoleWinner::Tie
    };
    WinnerDecision {
        player1_score,
        player2_score,
        winner,
    }
}
