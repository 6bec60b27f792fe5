//! Application state owned by the presentation layer.
//!
//! `AppState` gathers everything a front end needs: the catalog, the progress
//! log, session progression settings and display preferences. Storage is
//! injected through [`KeyValueStore`] on load and persist.

use crate::catalog::Catalog;
use crate::export::to_csv;
use crate::prefs::{CompactMode, DisplaySignals, Theme};
use crate::rows::derive_rows;
use crate::store::{KeyValueStore, COMPACT_MODE_KEY, PROGRESS_LOG_KEY, THEME_KEY};
use crate::{DerivedRow, Error, ProgressLog, ProgressionSettings, Result};

/// Everything the presentation layer renders from
#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub log: ProgressLog,
    pub settings: ProgressionSettings,
    pub theme: Theme,
    pub compact: CompactMode,
}

impl AppState {
    /// A fresh state with an empty log entry for every exercise
    pub fn new(catalog: Catalog, settings: ProgressionSettings) -> Self {
        let log = ProgressLog::empty_for(&catalog);
        Self {
            catalog,
            log,
            settings,
            theme: Theme::default(),
            compact: CompactMode::default(),
        }
    }

    /// Load persisted state from `store`
    ///
    /// Missing, unreadable or corrupt values fall back to defaults; loading
    /// never fails.
    pub fn load(store: &dyn KeyValueStore, catalog: Catalog, settings: ProgressionSettings) -> Self {
        let mut state = Self::new(catalog, settings);

        if let Some(raw) = read_key(store, PROGRESS_LOG_KEY) {
            match serde_json::from_str::<ProgressLog>(&raw) {
                Ok(log) => state.log = log,
                Err(e) => {
                    tracing::warn!("Failed to parse stored progress log: {}. Using defaults.", e)
                }
            }
        }

        state.theme = Theme::from_stored(read_key(store, THEME_KEY).as_deref());
        state.compact = CompactMode::from_stored(read_key(store, COMPACT_MODE_KEY).as_deref());
        state
    }

    /// Write the log and display preferences to `store`
    pub fn persist(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        // Compact JSON, same shape as the stored map
        let log = serde_json::to_string(&self.log)?;
        store.set(PROGRESS_LOG_KEY, &log)?;
        store.set(THEME_KEY, self.theme.as_str())?;
        store.set(COMPACT_MODE_KEY, self.compact.as_str())?;
        tracing::debug!("Persisted state for {} exercises", self.log.len());
        Ok(())
    }

    /// Set the start value for a catalog exercise
    pub fn set_start(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        self.require_exercise(id)?;
        self.log.set_start(id, value);
        Ok(())
    }

    /// Set the actual result for a catalog exercise in `week` (0-based)
    pub fn set_actual(&mut self, id: &str, week: usize, value: impl Into<String>) -> Result<()> {
        self.require_exercise(id)?;
        self.log.set_actual(id, week, value)
    }

    pub fn reset_all(&mut self) {
        self.log.reset_all(&self.catalog);
    }

    /// Current rows, recomputed from scratch
    pub fn rows(&self) -> Vec<DerivedRow> {
        derive_rows(&self.catalog, &self.log, &self.settings)
    }

    /// CSV export of the current rows
    pub fn export_csv(&self) -> Result<String> {
        to_csv(&self.rows())
    }

    pub fn is_dark(&self, signals: &DisplaySignals) -> bool {
        self.theme.is_dark(signals)
    }

    pub fn is_compact(&self, signals: &DisplaySignals) -> bool {
        self.compact.is_compact(signals)
    }

    fn require_exercise(&self, id: &str) -> Result<()> {
        if self.catalog.contains(id) {
            Ok(())
        } else {
            Err(Error::UnknownExercise(id.to_string()))
        }
    }
}

fn read_key(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Unable to read stored {}: {}. Using defaults.", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_default_catalog;
    use crate::store::{FileStore, MemoryStore};
    use crate::ExerciseLog;

    fn fresh() -> AppState {
        AppState::new(get_default_catalog().clone(), ProgressionSettings::default())
    }

    #[test]
    fn test_load_from_empty_store() {
        crate::logging::init_test();
        let store = MemoryStore::new();
        let state = AppState::load(&store, get_default_catalog().clone(), ProgressionSettings::default());

        assert_eq!(state.log.len(), 8);
        assert_eq!(state.theme, Theme::System);
        assert_eq!(state.compact, CompactMode::Auto);
    }

    #[test]
    fn test_persist_and_reload() {
        let mut store = MemoryStore::new();
        let mut state = fresh();
        state.set_start("bench", "60").unwrap();
        state.set_actual("plank", 3, "50").unwrap();
        state.theme = Theme::Dark;
        state.compact = CompactMode::On;
        state.persist(&mut store).unwrap();

        let reloaded = AppState::load(&store, get_default_catalog().clone(), ProgressionSettings::default());
        assert_eq!(reloaded.log, state.log);
        assert_eq!(reloaded.theme, Theme::Dark);
        assert_eq!(reloaded.compact, CompactMode::On);
    }

    #[test]
    fn test_corrupt_log_reinitializes() {
        crate::logging::init_test();
        let mut store = MemoryStore::new();
        store.set(PROGRESS_LOG_KEY, "{ invalid json }").unwrap();
        store.set(THEME_KEY, "light").unwrap();

        let state = AppState::load(&store, get_default_catalog().clone(), ProgressionSettings::default());
        assert_eq!(state.log, ProgressLog::empty_for(get_default_catalog()));
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_partial_stored_log_defaults_missing_entries() {
        let mut store = MemoryStore::new();
        store
            .set(PROGRESS_LOG_KEY, r#"{"bench":{"start":"50","actuals":["","","",""]}}"#)
            .unwrap();

        let state = AppState::load(&store, get_default_catalog().clone(), ProgressionSettings::default());
        assert_eq!(state.log.get("bench").start, "50");
        assert_eq!(*state.log.get("plank"), ExerciseLog::default());
        assert_eq!(state.rows().len(), 8);
    }

    #[test]
    fn test_numeric_stored_start_keeps_other_entries() {
        let mut store = MemoryStore::new();
        store
            .set(
                PROGRESS_LOG_KEY,
                r#"{"bench":{"start":40},"plank":{"start":"30","actuals":["31","","",""]}}"#,
            )
            .unwrap();

        let state = AppState::load(&store, get_default_catalog().clone(), ProgressionSettings::default());
        assert_eq!(state.log.get("bench").start, "40");
        assert_eq!(state.log.get("plank").actuals[0], "31");
        let plank = state.rows().into_iter().find(|r| r.id == "plank").unwrap();
        assert_eq!(plank.targets, [Some(30), Some(35), Some(40), Some(45)]);
    }

    #[test]
    fn test_unknown_exercise_rejected() {
        let mut state = fresh();
        assert!(matches!(
            state.set_start("squat", "100"),
            Err(Error::UnknownExercise(_))
        ));
        assert!(matches!(
            state.set_actual("squat", 0, "100"),
            Err(Error::UnknownExercise(_))
        ));
    }

    #[test]
    fn test_reset_all_then_read() {
        let mut state = fresh();
        state.set_start("row", "45").unwrap();
        state.set_actual("row", 0, "45").unwrap();
        state.reset_all();

        for id in state.catalog.ids() {
            let entry = state.log.get(id);
            assert_eq!(entry.start, "");
            assert_eq!(entry.actuals, ["", "", "", ""]);
        }
    }

    #[test]
    fn test_export_matches_rows() {
        let mut state = fresh();
        state.set_start("plank", "30").unwrap();
        let csv = state.export_csv().unwrap();

        let lines: Vec<_> = csv.split('\n').collect();
        assert_eq!(lines.len(), 1 + state.catalog.exercises.len());
        assert!(lines[1].starts_with("Bänkpress,4×8–10,,8,,9,,10,,10,"));
        assert_eq!(lines[8], "Plankan,3×30–45 sek,30,30,,35,,40,,45,");
    }

    #[test]
    fn test_file_store_backed_state() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        let mut state = fresh();
        state.set_actual("curl", 1, "13").unwrap();
        state.persist(&mut store).unwrap();

        let reloaded = AppState::load(&store, get_default_catalog().clone(), ProgressionSettings::default());
        assert_eq!(reloaded.log.get("curl").actuals[1], "13");
    }

    #[test]
    fn test_display_resolution() {
        let mut state = fresh();
        let signals = DisplaySignals {
            system_prefers_dark: true,
            small_screen: false,
        };
        assert!(state.is_dark(&signals));
        assert!(!state.is_compact(&signals));

        state.theme = Theme::Light;
        state.compact = CompactMode::On;
        assert!(!state.is_dark(&signals));
        assert!(state.is_compact(&signals));
    }
}
