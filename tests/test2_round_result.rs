mod common;

use common::{par_values, sample_course, sample_player};
use golf_scorecard::error::CoreError;
use golf_scorecard::model::TeeColor;
use golf_scorecard::score::compute_round_result;

#[test]
fn nine_handicap_off_blue_takes_one_stroke_on_front_nine() {
    // blue stroke indexes are 1..=18 in hole order, so a 9 handicap
    // earns exactly one stroke on each of holes 1-9 and none after
    let course = sample_course();
    let player = sample_player(1, 9, TeeColor::Blue);
    let par = par_values();
    let putts = vec![2; 18];

    let round = compute_round_result(&player, &course, &par, &putts).unwrap();

    for hole in &round.hole_results[..9] {
        let par = par[(hole.hole - 1) as usize];
        assert_eq!(hole.net_strokes, par - 1, "hole {}", hole.hole);
    }
    for hole in &round.hole_results[9..] {
        let par = par[(hole.hole - 1) as usize];
        assert_eq!(hole.net_strokes, par, "hole {}", hole.hole);
    }
    assert_eq!(round.total_net_strokes, round.total_strokes - 9);
}

#[test]
fn totals_are_sums_and_front_back_add_up() {
    let course = sample_course();
    let player = sample_player(2, 23, TeeColor::White);
    let strokes: Vec<i32> = (0..18).map(|i| 3 + (i % 4)).collect();
    let putts: Vec<i32> = (0..18).map(|i| 1 + (i % 3)).collect();

    let round = compute_round_result(&player, &course, &strokes, &putts).unwrap();

    assert_eq!(round.total_strokes, strokes.iter().sum::<i32>());
    assert_eq!(round.total_putts, putts.iter().sum::<i32>());
    assert_eq!(
        round.front_nine.strokes + round.back_nine.strokes,
        round.total_strokes
    );
    assert_eq!(
        round.front_nine.net_strokes + round.back_nine.net_strokes,
        round.total_net_strokes
    );
    assert_eq!(
        round.front_nine.putts + round.back_nine.putts,
        round.total_putts
    );
    assert_eq!(round.hole_results.len(), 18);
}

#[test]
fn tee_color_selects_the_stroke_index_sequence() {
    let course = sample_course();
    let par = par_values();
    let putts = vec![2; 18];

    // white tees are indexed 18..=1, so a 1 handicap strokes on hole 18
    let player = sample_player(3, 1, TeeColor::White);
    let round = compute_round_result(&player, &course, &par, &putts).unwrap();
    assert_eq!(round.hole_results[17].net_strokes, par[17] - 1);
    assert_eq!(round.hole_results[0].net_strokes, par[0]);
}

#[test]
fn short_inputs_are_rejected() {
    let course = sample_course();
    let player = sample_player(4, 12, TeeColor::Red);

    let err = compute_round_result(&player, &course, &vec![4; 17], &vec![2; 18]).unwrap_err();
    assert!(matches!(err, CoreError::InvalidScorecard(_)), "{err}");
    assert!(err.to_string().contains("18"));

    let err = compute_round_result(&player, &course, &vec![4; 18], &vec![2; 5]).unwrap_err();
    assert!(matches!(err, CoreError::InvalidScorecard(_)), "{err}");
}
