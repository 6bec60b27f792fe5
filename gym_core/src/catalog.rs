//! Default catalog of exercises.
//!
//! This module provides the built-in upper-body program and catalog
//! validation.

use crate::scheme::parse_scheme_detailed;
use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The ordered list of exercises shown and exported
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    pub exercises: Vec<ExerciseDefinition>,
}

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog: eight upper-body exercises in program order
pub fn build_default_catalog() -> Catalog {
    let exercise = |id: &str, name: &str, scheme: &str, unit: Unit| ExerciseDefinition {
        id: id.into(),
        name: name.into(),
        scheme: scheme.into(),
        unit,
    };

    Catalog {
        exercises: vec![
            exercise("bench", "Bänkpress", "4×8–10", Unit::Kg),
            exercise("lat", "Latsdrag", "4×8–10", Unit::Kg),
            exercise("db_sh_press", "Hantelpress (sittande)", "3×10–12", Unit::Kg),
            exercise("row", "Sittande rodd", "3×10–12", Unit::Kg),
            exercise("incl_db", "Lutande hantelpress", "3×10–12", Unit::Kg),
            exercise("curl", "Bicepscurl", "3×12", Unit::Kg),
            exercise("pushdown", "Triceps pushdown", "3×12", Unit::Kg),
            exercise("plank", "Plankan", "3×30–45 sek", Unit::Sek),
        ],
    }
}

impl Catalog {
    pub fn new(exercises: Vec<ExerciseDefinition>) -> Self {
        Self { exercises }
    }

    /// Look up an exercise by id
    pub fn get(&self, id: &str) -> Option<&ExerciseDefinition> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.exercises.iter().map(|e| e.id.as_str())
    }

    /// Validate the catalog and return a list of problems
    ///
    /// Schemes that only parse with fallbacks are logged but not reported;
    /// hand-edited scheme strings must never block the program.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.exercises.is_empty() {
            errors.push("Catalog has no exercises".to_string());
        }

        let mut seen = HashSet::new();
        for exercise in &self.exercises {
            if exercise.id.trim().is_empty() {
                errors.push(format!("Exercise {:?} has an empty id", exercise.name));
            } else if !seen.insert(exercise.id.as_str()) {
                errors.push(format!("Duplicate exercise id {}", exercise.id));
            }

            if exercise.name.trim().is_empty() {
                errors.push(format!("Exercise {} has an empty name", exercise.id));
            }

            let parsed = parse_scheme_detailed(Some(exercise.scheme.as_str()));
            if !parsed.is_exact() {
                tracing::debug!(
                    "Exercise {} scheme {:?} uses defaults for {:?}",
                    exercise.id,
                    exercise.scheme,
                    parsed.fallbacks
                );
            }
        }

        errors
    }
}
