//! Weekly target computation for the four-week block.
//!
//! This module implements the progression rules for both unit kinds:
//! - Weight (kg): reps climb from the bottom of the scheme range by
//!   `reps_per_week` and stay pinned at the top once reached
//! - Time (sek): seconds grow linearly from the start value by
//!   `seconds_per_week`, with no ceiling

use crate::rounding::round_half_up;
use crate::{ProgressionSettings, Target, Unit, WEEKS};

/// Compute the four weekly targets for one exercise
///
/// Weight targets ignore `start` entirely. Time targets need a valid start;
/// without one all four weeks are empty.
pub fn weekly_targets(
    start: Option<f64>,
    unit: Unit,
    min_reps: i32,
    max_reps: i32,
    settings: &ProgressionSettings,
) -> [Target; WEEKS] {
    let mut targets = [None; WEEKS];
    for (week, target) in targets.iter_mut().enumerate() {
        *target = match unit {
            Unit::Kg => Some(weight_target(
                week as i32,
                min_reps,
                max_reps,
                settings.reps_per_week,
            )),
            Unit::Sek => start.map(|s| time_target(week as i32, s, settings.seconds_per_week)),
        };
    }
    targets
}

/// Reps for a weight exercise in week `week` (0-based)
pub fn weight_target(week: i32, min_reps: i32, max_reps: i32, reps_per_week: i32) -> i32 {
    let reps = min_reps.saturating_add(week.saturating_mul(reps_per_week));
    // Mirrors min(max(reps, lo), hi): an inverted range resolves to the top
    reps.max(min_reps).min(max_reps)
}

/// Seconds for a time exercise in week `week` (0-based)
pub fn time_target(week: i32, start: f64, seconds_per_week: i32) -> i32 {
    let seconds = round_half_up(start + f64::from(week) * f64::from(seconds_per_week));
    // `as` saturates at the i32 bounds
    seconds as i32
}
