use crate::model::GameSession;
use maud::{html, Markup};

/// Stored sessions, newest first, one row per player round. Doubles as
/// the evolution view: per-session totals line up per player so
/// progress is readable down a column.
#[must_use]
pub fn render_history(sessions: &[GameSession]) -> Markup {
    html! {
        h3 { "Round history" }
        @if sessions.is_empty() {
            p { "No rounds recorded yet." }
        } @else {
            table class="styled-table history" {
                thead {
                    tr {
                        th { "Date" }
                        th { "Course" }
                        th { "Player" }
                        th { "Gross" }
                        th { "Net" }
                        th { "Putts" }
                    }
                }
                tbody {
                    @for session in sessions {
                        @for player in &session.players {
                            @if let Some(round) = session.result_for(player.id) {
                                tr {
                                    td { (session.date) }
                                    td { (session.course.name) }
                                    td { (player.display_name()) }
                                    td { (round.total_strokes) }
                                    td { (round.total_net_strokes) }
                                    td { (round.total_putts) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
