use crate::model::{ComparisonResult, HoleWinner, WinnerDecision};
use maud::{html, Markup};

fn winner_name(comparison: &ComparisonResult, winner: HoleWinner) -> String {
    match winner {
        HoleWinner::Player1 => comparison.player1.display_name(),
        HoleWinner::Player2 => comparison.player2.display_name(),
        HoleWinner::Tie => "Tie".to_string(),
    }
}

fn medal_row(comparison: &ComparisonResult, label: &str, decision: &WinnerDecision) -> Markup {
    html! {
        tr {
            td { (label) }
            td { (decision.player1_score) }
            td { (decision.player2_score) }
            td { (winner_name(comparison, decision.winner)) }
        }
    }
}

/// Head-to-head page: medal-play summary then the hole-by-hole
/// match-play table with its running status column.
#[must_use]
pub fn render_comparison(comparison: &ComparisonResult) -> Markup {
    let p1 = comparison.player1.display_name();
    let p2 = comparison.player2.display_name();

    html! {
        h3 class="comparison-title" { (p1) " vs " (p2) }

        h4 { "Medal play (net)" }
        table class="styled-table medal-play" {
            thead {
                tr {
                    th { "Range" }
                    th { (p1) }
                    th { (p2) }
                    th { "Winner" }
                }
            }
            tbody {
                (medal_row(comparison, "Front nine", &comparison.medal_play.front_nine))
                (medal_row(comparison, "Back nine", &comparison.medal_play.back_nine))
                (medal_row(comparison, "Total", &comparison.medal_play.total))
            }
        }

        h4 { "Match play" }
        table class="styled-table match-play" {
            thead {
                tr {
                    th { "Hole" }
                    th { (p1) " net" }
                    th { (p2) " net" }
                    th { "Winner" }
                    th { "Status" }
                }
            }
            tbody {
                @for hole in &comparison.match_play.hole_results {
                    tr {
                        td { (hole.hole) }
                        td { (hole.player1_net) }
                        td { (hole.player2_net) }
                        td { (winner_name(comparison, hole.winner)) }
                        td { (hole.status) }
                    }
                }
            }
        }
        table class="styled-table match-play-summary" {
            tbody {
                tr { td { "Front nine" } td class="front-nine-status" { (comparison.match_play.front_nine_status) } }
                tr { td { "Back nine" } td class="back-nine-status" { (comparison.match_play.back_nine_status) } }
                tr { td { "Final" } td class="final-status" { (comparison.match_play.final_status) } }
            }
        }
    }
}
