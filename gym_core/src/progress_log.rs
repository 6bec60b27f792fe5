//! The persisted progress log: one entry per exercise id.
//!
//! Values are stored as opaque strings. Nothing is validated on write;
//! numbers are only interpreted when rows are derived.

use crate::{Catalog, Error, ExerciseLog, Result, WEEKS};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Mapping from exercise id to its log entry
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressLog {
    entries: BTreeMap<String, ExerciseLog>,
}

impl ProgressLog {
    /// A log with an empty entry for every exercise in the catalog
    pub fn empty_for(catalog: &Catalog) -> Self {
        let entries = catalog
            .exercises
            .iter()
            .map(|e| (e.id.clone(), ExerciseLog::default()))
            .collect();
        Self { entries }
    }

    /// Entry for `id`, or an empty one if nothing has been logged
    pub fn get(&self, id: &str) -> Cow<'_, ExerciseLog> {
        match self.entries.get(id) {
            Some(log) => Cow::Borrowed(log),
            None => Cow::Owned(ExerciseLog::default()),
        }
    }

    pub fn set_start(&mut self, id: &str, value: impl Into<String>) {
        self.entry(id).start = value.into();
    }

    /// Record the actual result for `week` (0-based)
    pub fn set_actual(&mut self, id: &str, week: usize, value: impl Into<String>) -> Result<()> {
        if week >= WEEKS {
            return Err(Error::WeekOutOfRange(week));
        }
        self.entry(id).actuals[week] = value.into();
        Ok(())
    }

    /// Replace every entry with an empty one for each catalog exercise
    ///
    /// Entries for ids outside the catalog are dropped.
    pub fn reset_all(&mut self, catalog: &Catalog) {
        *self = Self::empty_for(catalog);
        tracing::info!("Reset progress log for {} exercises", self.entries.len());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&mut self, id: &str) -> &mut ExerciseLog {
        self.entries.entry(id.to_string()).or_default()
    }
}
