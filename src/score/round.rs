use crate::error::CoreError;
use crate::model::{Course, HoleResult, NineSummary, Player, RoundResult, HOLES};
use crate::score::allocation::net_strokes;

/// Compute a player's full round from raw scorecard entry.
///
/// # Errors
///
/// Returns `CoreError::InvalidScorecard` unless both input slices carry
/// exactly 18 entries.
pub fn compute_round_result(
    player: &Player,
    course: &Course,
    strokes_per_hole: &[i32],
    putts_per_hole: &[i32],
) -> Result<RoundResult, CoreError> {
    if strokes_per_hole.len() != HOLES {
        return Err(CoreError::InvalidScorecard(format!(
            "expected {HOLES} stroke entries, got {}",
            strokes_per_hole.len()
        )));
    }
    if putts_per_hole.len() != HOLES {
        return Err(CoreError::InvalidScorecard(format!(
            "expected {HOLES} putt entries, got {}",
            putts_per_hole.len()
        )));
    }

    let indexes = course.handicaps.for_tee(player.tee_color);
    let mut hole_results = Vec::with_capacity(HOLES);
    for i in 0..HOLES {
        hole_results.push(HoleResult {
            hole: (i + 1) as i32,
            strokes: strokes_per_hole[i],
            putts: putts_per_hole[i],
            net_strokes: net_strokes(strokes_per_hole[i], player.handicap, indexes[i]),
        });
    }

    Ok(assemble_round_result(player.id, hole_results))
}

/// Roll per-hole results up into a `RoundResult`. Also used when
/// rebuilding a round from stored hole rows, so totals are always
/// re-derived and never read back from storage.
#[must_use]
pub fn assemble_round_result(player_id: i64, hole_results: Vec<HoleResult>) -> RoundResult {
    let front_nine = nine_summary(hole_results.iter().filter(|h| h.hole <= 9));
    let back_nine = nine_summary(hole_results.iter().filter(|h| h.hole > 9));

    RoundResult {
        player_id,
        total_strokes: front_nine.strokes + back_nine.strokes,
        total_net_strokes: front_nine.net_strokes + back_nine.net_strokes,
        total_putts: front_nine.putts + back_nine.putts,
        front_nine,
        back_nine,
        hole_results,
    }
}

fn nine_summary<'a>(holes: impl Iterator<Item = &'a HoleResult>) -> NineSummary {
    let mut summary = NineSummary::default();
    for hole in holes {
        summary.strokes += hole.strokes;
        summary.net_strokes += hole.net_strokes;
        summary.putts += hole.putts;
    }
    summary
}
