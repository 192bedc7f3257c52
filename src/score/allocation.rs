/// Net strokes for one hole.
///
/// A handicap of 18 or more grants `handicap / 18` strokes on every
/// hole; the remainder `handicap % 18` is handed out one stroke at a
/// time starting at the hardest hole (stroke index 1). The comparison
/// is `>=`, so a remainder equal to the hole's stroke index still earns
/// the extra stroke. Net strokes never drop below 1.
///
/// Callers supply a stroke index in 1..=18 (course data is validated at
/// the ingest boundary) and a non-negative handicap; the function
/// itself performs no validation.
#[must_use]
pub fn net_strokes(gross_strokes: i32, player_handicap: i32, hole_stroke_index: i32) -> i32 {
    let strokes_received =
        player_handicap / 18 + i32::from(player_handicap % 18 >= hole_stroke_index);
    (gross_strokes - strokes_received).max(1)
}
