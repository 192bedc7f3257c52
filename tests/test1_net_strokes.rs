use golf_scorecard::score::net_strokes;

#[test]
fn matches_reference_formula_across_domain() {
    for gross in 1..=12 {
        for handicap in 0..=54 {
            for stroke_index in 1..=18 {
                let received = handicap / 18 + i32::from(handicap % 18 >= stroke_index);
                let expected = (gross - received).max(1);
                assert_eq!(
                    net_strokes(gross, handicap, stroke_index),
                    expected,
                    "gross={gross} handicap={handicap} stroke_index={stroke_index}"
                );
            }
        }
    }
}

#[test]
fn handicap_zero_gets_no_allocation() {
    for stroke_index in 1..=18 {
        assert_eq!(net_strokes(5, 0, stroke_index), 5);
        assert_eq!(net_strokes(1, 0, stroke_index), 1);
    }
}

#[test]
fn handicap_eighteen_gets_exactly_one_stroke_everywhere() {
    // 18 % 18 == 0, so no hole earns an extra stroke on top of the base
    for stroke_index in 1..=18 {
        assert_eq!(net_strokes(5, 18, stroke_index), 4);
    }
}

#[test]
fn handicap_nineteen_adds_extra_only_on_hardest_hole() {
    assert_eq!(net_strokes(5, 19, 1), 3);
    for stroke_index in 2..=18 {
        assert_eq!(net_strokes(5, 19, stroke_index), 4);
    }
}

#[test]
fn remainder_equal_to_stroke_index_still_earns_the_stroke() {
    // comparison is >=, not >
    assert_eq!(net_strokes(5, 9, 9), 4);
    assert_eq!(net_strokes(5, 9, 10), 5);
}

#[test]
fn net_strokes_never_drop_below_one() {
    assert_eq!(net_strokes(1, 54, 1), 1);
    assert_eq!(net_strokes(2, 54, 18), 1);
    assert_eq!(net_strokes(1, 36, 5), 1);
}
