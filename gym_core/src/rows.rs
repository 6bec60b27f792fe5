//! Row derivation: catalog + log + settings → display/export rows.
//!
//! Rows are a pure function of their inputs and are rebuilt on every change.

use crate::progression::weekly_targets;
use crate::rounding::parse_number;
use crate::scheme::parse_scheme;
use crate::{Catalog, DerivedRow, ExerciseDefinition, ExerciseLog, ProgressLog, ProgressionSettings};

/// Derive one row per catalog exercise, in catalog order
pub fn derive_rows(
    catalog: &Catalog,
    log: &ProgressLog,
    settings: &ProgressionSettings,
) -> Vec<DerivedRow> {
    catalog
        .exercises
        .iter()
        .map(|exercise| derive_row(exercise, &log.get(&exercise.id), settings))
        .collect()
}

/// Derive the row for a single exercise
pub fn derive_row(
    exercise: &ExerciseDefinition,
    entry: &ExerciseLog,
    settings: &ProgressionSettings,
) -> DerivedRow {
    let scheme = parse_scheme(&exercise.scheme);
    let start = parse_number(&entry.start);
    let targets = weekly_targets(
        start,
        exercise.unit,
        scheme.min_reps,
        scheme.max_reps,
        settings,
    );

    DerivedRow {
        id: exercise.id.clone(),
        name: exercise.name.clone(),
        scheme: exercise.scheme.clone(),
        unit: exercise.unit,
        start: entry.start.clone(),
        targets,
        actuals: entry.actuals.clone(),
    }
}
