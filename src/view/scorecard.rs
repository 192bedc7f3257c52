use crate::model::{Course, Player, RoundResult};
use maud::{html, Markup};

/// One player's full scorecard: hole-by-hole gross/putts/net with
/// OUT (front nine), IN (back nine) and TOT columns.
#[must_use]
pub fn render_scorecard(player: &Player, course: &Course, round: &RoundResult) -> Markup {
    html! {
        h3 class="scorecard-title" {
            (player.display_name()) " (" (player.code) ", hcp " (player.handicap) ") — " (course.name)
        }
        table class="styled-table scorecard" {
            thead {
                tr {
                    th { "Hole" }
                    @for hole in &round.hole_results[..9] { th { (hole.hole) } }
                    th { "OUT" }
                    @for hole in &round.hole_results[9..] { th { (hole.hole) } }
                    th { "IN" }
                    th { "TOT" }
                }
                tr {
                    th { "Par" }
                    @for par in &course.par[..9] { th { (par) } }
                    th { (course.par[..9].iter().sum::<i32>()) }
                    @for par in &course.par[9..] { th { (par) } }
                    th { (course.par[9..].iter().sum::<i32>()) }
                    th { (course.par.iter().sum::<i32>()) }
                }
                tr {
                    th { "SI" }
                    @let indexes = course.handicaps.for_tee(player.tee_color);
                    @for idx in &indexes[..9] { th { (idx) } }
                    th { }
                    @for idx in &indexes[9..] { th { (idx) } }
                    th { }
                    th { }
                }
            }
            tbody {
                tr class="gross" {
                    td { "Gross" }
                    @for hole in &round.hole_results[..9] { td { (hole.strokes) } }
                    td { (round.front_nine.strokes) }
                    @for hole in &round.hole_results[9..] { td { (hole.strokes) } }
                    td { (round.back_nine.strokes) }
                    td { (round.total_strokes) }
                }
                tr class="putts" {
                    td { "Putts" }
                    @for hole in &round.hole_results[..9] { td { (hole.putts) } }
                    td { (round.front_nine.putts) }
                    @for hole in &round.hole_results[9..] { td { (hole.putts) } }
                    td { (round.back_nine.putts) }
                    td { (round.total_putts) }
                }
                tr class="net" {
                    td { "Net" }
                    @for hole in &round.hole_results[..9] { td { (hole.net_strokes) } }
                    td { (round.front_nine.net_strokes) }
                    @for hole in &round.hole_results[9..] { td { (hole.net_strokes) } }
                    td { (round.back_nine.net_strokes) }
                    td { (round.total_net_strokes) }
                }
            }
        }
    }
}

/// Scorecards for every player in a finished round.
#[must_use]
pub fn render_round_results(
    course: &Course,
    players: &[Player],
    results: &[RoundResult],
) -> Markup {
    html! {
        div class="round-results" {
            @for player in players {
                @if let Some(round) = results.iter().find(|r| r.player_id == player.id) {
                    (render_scorecard(player, course, round))
                }
            }
        }
    }
}
