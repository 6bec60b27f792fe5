//! Core domain types for the gymlog system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercise definitions and their units
//! - Parsed set/rep schemes
//! - Per-exercise logs and the rows derived from them
//! - Session-wide progression settings

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Number of weeks in a progression block
pub const WEEKS: usize = 4;

// ============================================================================
// Exercise Types
// ============================================================================

/// How an exercise is measured
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Weight-based: load in kg, targets are reps
    Kg,
    /// Time-based: targets are seconds
    Sek,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::Sek => "sek",
        }
    }

    /// Label for the target column ("reps" for weight, "sek" for time)
    pub fn target_label(&self) -> &'static str {
        match self {
            Unit::Kg => "reps",
            Unit::Sek => "sek",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable catalog entry (e.g., "Bänkpress 4×8–10 kg")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseDefinition {
    pub id: String,
    pub name: String,
    pub scheme: String,
    pub unit: Unit,
}

// ============================================================================
// Scheme
// ============================================================================

/// Structured form of a scheme string like "4×8–10"
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeSpec {
    pub sets: i32,
    pub min_reps: i32,
    pub max_reps: i32,
}

// ============================================================================
// Log and Derived Types
// ============================================================================

/// Persisted per-exercise entry: a start value and one actual per week
///
/// Values are kept verbatim as entered. An empty string means "not set".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ExerciseLog {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub start: String,
    #[serde(default, deserialize_with = "deserialize_actuals")]
    pub actuals: [String; WEEKS],
}

/// Stored value as text: numbers keep their digits, anything else is ""
fn stored_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(stored_text)
}

/// Stored arrays of the wrong length are padded with "" or truncated
fn deserialize_actuals<'de, D>(deserializer: D) -> std::result::Result<[String; WEEKS], D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = Vec::deserialize(deserializer)?;
    let mut actuals: [String; WEEKS] = Default::default();
    for (slot, value) in actuals.iter_mut().zip(raw) {
        *slot = stored_text(value);
    }
    Ok(actuals)
}

/// A computed weekly target: reps for weight exercises, seconds for time
pub type Target = Option<i32>;

/// A display/export row, recomputed on every change and never persisted
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DerivedRow {
    pub id: String,
    pub name: String,
    pub scheme: String,
    pub unit: Unit,
    pub start: String,
    pub targets: [Target; WEEKS],
    pub actuals: [String; WEEKS],
}

/// Weekly increments shared by every exercise of the matching unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionSettings {
    pub reps_per_week: i32,
    pub seconds_per_week: i32,
}

impl Default for ProgressionSettings {
    fn default() -> Self {
        Self {
            reps_per_week: 1,
            seconds_per_week: 5,
        }
    }
}
