#![forbid(unsafe_code)]

//! Core domain model and business logic for gymlog, a four-week strength
//! progression planner.
//!
//! This crate provides:
//! - Domain types (exercises, schemes, logs, derived rows)
//! - The default catalog
//! - Scheme parsing, weekly target progression and weight rounding
//! - Row derivation and CSV export
//! - Persistence (key-value store port, application state)
//! - Configuration, display preferences and logging

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod scheme;
pub mod progression;
pub mod rounding;
pub mod progress_log;
pub mod rows;
pub mod export;
pub mod prefs;
pub mod store;
pub mod app;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog};
pub use config::Config;
pub use scheme::{parse_scheme, parse_scheme_detailed, SchemeField, SchemeParse};
pub use progression::weekly_targets;
pub use rounding::{round_input, round_to};
pub use progress_log::ProgressLog;
pub use rows::derive_rows;
pub use export::{to_csv, write_export, EXPORT_FILE_NAME, EXPORT_MIME};
pub use prefs::{CompactMode, DisplaySignals, Theme};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use app::AppState;
