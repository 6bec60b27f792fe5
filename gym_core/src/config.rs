//! Configuration file support for gymlog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/gymlog/config.toml`.

use crate::catalog::{get_default_catalog, Catalog};
use crate::export::EXPORT_FILE_NAME;
use crate::rounding::DEFAULT_WEIGHT_STEP;
use crate::{Error, ExerciseDefinition, ProgressionSettings, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub progression: ProgressionConfig,

    #[serde(default)]
    pub export: ExportConfig,

    /// Custom catalog; replaces the built-in program when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exercises: Vec<ExerciseDefinition>,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Progression parameters configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgressionConfig {
    #[serde(default = "default_reps_per_week")]
    pub reps_per_week: i32,

    #[serde(default = "default_seconds_per_week")]
    pub seconds_per_week: i32,

    /// Rounding step for weights entered with rounding enabled
    #[serde(default = "default_weight_step")]
    pub weight_step: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            reps_per_week: default_reps_per_week(),
            seconds_per_week: default_seconds_per_week(),
            weight_step: default_weight_step(),
        }
    }
}

/// Export configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_export_file_name(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".local/share"))
            .unwrap_or_else(|| PathBuf::from("."))
    });
    base.join("gymlog")
}

fn default_reps_per_week() -> i32 {
    ProgressionSettings::default().reps_per_week
}

fn default_seconds_per_week() -> i32 {
    ProgressionSettings::default().seconds_per_week
}

fn default_weight_step() -> f64 {
    DEFAULT_WEIGHT_STEP
}

fn default_export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from("."))
        });
        base.join("gymlog").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject settings no invocation could use
    pub fn validate(&self) -> Result<()> {
        let step = self.progression.weight_step;
        if !(step.is_finite() && step > 0.0) {
            return Err(Error::Config(format!(
                "weight_step must be a positive number, got {}",
                step
            )));
        }
        if self.export.file_name.trim().is_empty() {
            return Err(Error::Config("export file_name must not be empty".into()));
        }
        Ok(())
    }

    /// Session progression settings seeded from the config
    pub fn progression_settings(&self) -> ProgressionSettings {
        ProgressionSettings {
            reps_per_week: self.progression.reps_per_week,
            seconds_per_week: self.progression.seconds_per_week,
        }
    }

    /// The configured custom catalog, or the built-in one
    pub fn catalog(&self) -> Catalog {
        if self.exercises.is_empty() {
            get_default_catalog().clone()
        } else {
            Catalog::new(self.exercises.clone())
        }
    }
}
