//! Error types for the gym_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for gym_core operations
///
/// Malformed scheme strings, start values and weights never produce an
/// `Error`; they degrade to defaults or empty values at the call site.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Exercise id not present in the catalog
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    /// Week index outside 0..=3
    #[error("Week index {0} out of range (expected 0..=3)")]
    WeekOutOfRange(usize),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
