//! Display preferences: theme and compact mode.
//!
//! These only affect presentation. The core stores them and resolves them
//! against signals the presentation layer reports (system dark mode, small
//! screen); it never probes the environment itself.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color theme preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Display density preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompactMode {
    #[default]
    Auto,
    On,
    Off,
}

/// Environment signals supplied by the presentation layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplaySignals {
    pub system_prefers_dark: bool,
    pub small_screen: bool,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn is_dark(&self, signals: &DisplaySignals) -> bool {
        match self {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::System => signals.system_prefers_dark,
        }
    }

    /// Parse a stored value, falling back to the default for anything unknown
    pub fn from_stored(value: Option<&str>) -> Self {
        parse_stored(value, "theme")
    }
}

impl CompactMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompactMode::Auto => "auto",
            CompactMode::On => "on",
            CompactMode::Off => "off",
        }
    }

    pub fn is_compact(&self, signals: &DisplaySignals) -> bool {
        match self {
            CompactMode::On => true,
            CompactMode::Off => false,
            CompactMode::Auto => signals.small_screen,
        }
    }

    pub fn from_stored(value: Option<&str>) -> Self {
        parse_stored(value, "compact mode")
    }
}

fn parse_stored<T>(value: Option<&str>, what: &str) -> T
where
    T: FromStr + Default,
{
    match value {
        None => T::default(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unknown stored {} {:?}", what, raw);
            T::default()
        }),
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(Error::Config(format!("Unknown theme: {}", other))),
        }
    }
}

impl FromStr for CompactMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(CompactMode::Auto),
            "on" => Ok(CompactMode::On),
            "off" => Ok(CompactMode::Off),
            other => Err(Error::Config(format!("Unknown compact mode: {}", other))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CompactMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DARK_SMALL: DisplaySignals = DisplaySignals {
        system_prefers_dark: true,
        small_screen: true,
    };

    #[test]
    fn test_theme_resolution() {
        let plain = DisplaySignals::default();
        assert!(Theme::Dark.is_dark(&plain));
        assert!(!Theme::Light.is_dark(&DARK_SMALL));
        assert!(Theme::System.is_dark(&DARK_SMALL));
        assert!(!Theme::System.is_dark(&plain));
    }

    #[test]
    fn test_compact_resolution() {
        let plain = DisplaySignals::default();
        assert!(CompactMode::On.is_compact(&plain));
        assert!(!CompactMode::Off.is_compact(&DARK_SMALL));
        assert!(CompactMode::Auto.is_compact(&DARK_SMALL));
        assert!(!CompactMode::Auto.is_compact(&plain));
    }

    #[test]
    fn test_string_forms_roundtrip() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
        for mode in [CompactMode::Auto, CompactMode::On, CompactMode::Off] {
            assert_eq!(mode.to_string().parse::<CompactMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_stored_values_fall_back() {
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::System);
        assert_eq!(Theme::from_stored(None), Theme::System);
        assert_eq!(CompactMode::from_stored(Some("tiny")), CompactMode::Auto);
        assert_eq!(CompactMode::from_stored(Some("off")), CompactMode::Off);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
