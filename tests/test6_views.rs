mod common;

use common::{par_values, round_with_nets, sample_course, sample_player};
use chrono::NaiveDate;
use golf_scorecard::model::{GameSession, TeeColor};
use golf_scorecard::score::{compute_round_result, create_comparison};
use golf_scorecard::view::comparison::render_comparison;
use golf_scorecard::view::history::render_history;
use golf_scorecard::view::scorecard::render_scorecard;
use scraper::{Html, Selector};

#[test]
fn scorecard_renders_three_rows_of_eighteen_holes() {
    let course = sample_course();
    let player = sample_player(1, 9, TeeColor::Blue);
    let round = compute_round_result(&player, &course, &par_values(), &vec![2; 18]).unwrap();

    let html = Html::parse_fragment(&render_scorecard(&player, &course, &round).into_string());

    let header_cells = Selector::parse("table.scorecard thead tr:first-child th").unwrap();
    // Hole label + 9 holes + OUT + 9 holes + IN + TOT
    assert_eq!(html.select(&header_cells).count(), 22);

    let body_rows = Selector::parse("table.scorecard tbody tr").unwrap();
    let rows: Vec<_> = html.select(&body_rows).collect();
    assert_eq!(rows.len(), 3); // gross, putts, net

    let totals = Selector::parse("table.scorecard tbody tr.gross td").unwrap();
    let cells: Vec<String> = html
        .select(&totals)
        .map(|td| td.text().collect::<String>())
        .collect();
    assert_eq!(cells.len(), 22);
    assert_eq!(cells.last().unwrap(), &round.total_strokes.to_string());
}

#[test]
fn comparison_view_shows_hole_rows_and_summary_statuses() {
    let p1 = sample_player(1, 9, TeeColor::Blue);
    let p2 = sample_player(2, 0, TeeColor::Blue);
    let course = sample_course();
    let putts = vec![2; 18];
    let r1 = compute_round_result(&p1, &course, &par_values(), &putts).unwrap();
    let r2 = compute_round_result(&p2, &course, &par_values(), &putts).unwrap();
    let comparison = create_comparison(&p1, &p2, &r1, &r2);

    let html = Html::parse_fragment(&render_comparison(&comparison).into_string());

    let match_rows = Selector::parse("table.match-play tbody tr").unwrap();
    assert_eq!(html.select(&match_rows).count(), 18);

    let final_status = Selector::parse("td.final-status").unwrap();
    let status_text: String = html
        .select(&final_status)
        .next()
        .unwrap()
        .text()
        .collect();
    assert_eq!(status_text, "9UP (Match Won)");

    let medal_rows = Selector::parse("table.medal-play tbody tr").unwrap();
    assert_eq!(html.select(&medal_rows).count(), 3);
}

#[test]
fn history_lists_one_row_per_player_round() {
    let course = sample_course();
    let p1 = sample_player(1, 9, TeeColor::Blue);
    let p2 = sample_player(2, 0, TeeColor::White);
    let session = GameSession {
        id: 1,
        course,
        date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        players: vec![p1, p2],
        results: vec![round_with_nets(1, &[4; 18]), round_with_nets(2, &[5; 18])],
    };

    let html = Html::parse_fragment(&render_history(std::slice::from_ref(&session)).into_string());
    let rows = Selector::parse("table.history tbody tr").unwrap();
    assert_eq!(html.select(&rows).count(), 2);

    let empty = Html::parse_fragment(&render_history(&[]).into_string());
    assert_eq!(empty.select(&rows).count(), 0);
}
