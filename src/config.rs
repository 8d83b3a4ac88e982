//! Configuration file support for the animation demo.
//!
//! Holds the palette, effect names and press feedback timing, plus the log
//! level. Everything has a default so the page runs without any file.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EFFECTS, DEFAULT_PALETTE, press};
use crate::error::PageError;
use crate::model::{EffectSet, Palette};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get all log levels in order from least to most verbose.
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Name as written in the config file and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse a level name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|level| level.name().eq_ignore_ascii_case(name))
    }

    /// All level names joined for help and error text.
    pub fn names() -> String {
        Self::all()
            .iter()
            .map(LogLevel::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to log crate's Level (used by the browser console logger).
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration file format version.
pub const CONFIG_VERSION: u32 = 1;

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Colors drawn by the color buttons
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Mutually exclusive effect classes of the interactive box
    #[serde(default = "default_effects")]
    pub effects: Vec<String>,

    /// How long a pressed box keeps its transform
    #[serde(default = "default_press_feedback_ms")]
    pub press_feedback_ms: u64,

    /// Transform applied to a pressed box
    #[serde(default = "default_press_transform")]
    pub press_transform: String,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

fn default_effects() -> Vec<String> {
    DEFAULT_EFFECTS.iter().map(|e| e.to_string()).collect()
}

fn default_press_feedback_ms() -> u64 {
    press::FEEDBACK_MS
}

fn default_press_transform() -> String {
    press::TRANSFORM.to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            palette: default_palette(),
            effects: default_effects(),
            press_feedback_ms: default_press_feedback_ms(),
            press_transform: default_press_transform(),
            log_level: LogLevel::default(),
        }
    }
}

impl DemoConfig {
    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }
        if config.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if config.effects.is_empty() {
            return Err(ConfigError::EmptyEffects);
        }
        if let Some(color) = config.palette.iter().find(|c| c.trim().is_empty()) {
            return Err(ConfigError::InvalidEntry {
                field: "palette",
                entry: color.clone(),
            });
        }
        if let Some(effect) = config
            .effects
            .iter()
            .find(|e| PageError::check_token(e).is_err())
        {
            return Err(ConfigError::InvalidEntry {
                field: "effects",
                entry: effect.clone(),
            });
        }

        Ok(config)
    }

    /// Palette built from the configured colors.
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.iter().cloned()).unwrap_or_default()
    }

    /// Effect set built from the configured names.
    pub fn effect_set(&self) -> EffectSet {
        if self.effects.is_empty() {
            EffectSet::default()
        } else {
            EffectSet::new(self.effects.iter().cloned())
        }
    }

    /// Press feedback delay.
    pub fn press_feedback(&self) -> web_time::Duration {
        web_time::Duration::from_millis(self.press_feedback_ms)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "anim-demo.json"
    }

    /// Get the default config file path.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("anim-demo").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("anim-demo")
                    .join(Self::default_filename())
            })
        }
    }

    /// Read and validate a config file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load `path` (or the default path) and fall back to defaults on any failure.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: Option<&std::path::Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    log::debug!("No config file found, using defaults");
                    return Self::default();
                }
            },
        };

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

/// Errors that can occur when handling configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        /// Version found in the file
        file_version: u32,
        /// Newest version this build reads
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Palette list was empty
    #[error("Palette must contain at least one color")]
    EmptyPalette,

    /// Effect list was empty
    #[error("Effect list must contain at least one effect")]
    EmptyEffects,

    /// A palette color was blank or an effect was not a usable class name
    #[error("Invalid {field} entry '{entry}'")]
    InvalidEntry {
        /// Config field holding the entry
        field: &'static str,
        /// The rejected value
        entry: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_roundtrips_through_json() {
        let config = DemoConfig::default();
        let json = config.to_json().unwrap();
        let parsed = DemoConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = DemoConfig::from_json(r#"{"version": 1, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.palette.len(), 5);
        assert_eq!(config.effects, vec!["bounce", "shake", "flip", "swing"]);
        assert_eq!(config.press_feedback_ms, 300);
        assert_eq!(config.press_transform, "scale(0.95)");
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_version_too_new() {
        let err = DemoConfig::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_empty_lists_rejected() {
        assert!(matches!(
            DemoConfig::from_json(r#"{"version": 1, "palette": []}"#),
            Err(ConfigError::EmptyPalette)
        ));
        assert!(matches!(
            DemoConfig::from_json(r#"{"version": 1, "effects": []}"#),
            Err(ConfigError::EmptyEffects)
        ));
    }

    #[test]
    fn test_effect_entries_must_be_class_names() {
        let err = DemoConfig::from_json(r#"{"version": 1, "effects": ["bounce", "two words"]}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEntry { field: "effects", ref entry } if entry == "two words"
        ));
        assert!(DemoConfig::from_json(r#"{"version": 1, "effects": ["shake", ""]}"#).is_err());
    }

    #[test]
    fn test_blank_palette_color_rejected() {
        let err = DemoConfig::from_json(r##"{"version": 1, "palette": ["#fff", "  "]}"##)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEntry { field: "palette", .. }));

        let config =
            DemoConfig::from_json(r##"{"version": 1, "palette": ["rgb(1, 2, 3)"]}"##).unwrap();
        assert_eq!(config.palette, vec!["rgb(1, 2, 3)"]);
    }

    #[test]
    fn test_log_level_names() {
        for level in LogLevel::all() {
            let name = serde_json::to_string(level).unwrap();
            assert_eq!(name.trim_matches('"'), level.name());
            assert_eq!(LogLevel::from_name(level.name()), Some(*level));
        }
        assert_eq!(LogLevel::from_name("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_name("verbose"), None);
        assert_eq!(LogLevel::names(), "error, warn, info, debug, trace");
    }
}
