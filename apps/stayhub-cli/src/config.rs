//! # App Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STAYHUB_DB_PATH=/tmp/stayhub.db                                    │
//! │     STAYHUB_CURRENCY_SYMBOL=R                                          │
//! │     STAYHUB_MAX_ROOMS=4                                                │
//! │                                                                         │
//! │  2. TOML Config File (--config, or the platform config dir)           │
//! │     ~/.config/stayhub/stayhub.toml (Linux)                             │
//! │     ~/Library/Application Support/com.stayhub.app/stayhub.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! database_path = "/home/lerato/.local/share/stayhub/stayhub.db"
//!
//! [booking.rooms]
//! min = 1
//! max = 4
//!
//! [display]
//! currency_symbol = "R"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use stayhub_core::money::DEFAULT_CURRENCY_SYMBOL;
use stayhub_core::{BookingLimits, CounterBounds, ValidationError};

const CONFIG_FILE_NAME: &str = "stayhub.toml";
const DATABASE_FILE_NAME: &str = "stayhub.db";

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid booking limits: {0}")]
    Limits(#[from] ValidationError),

    #[error("Cannot create data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

fn default_database_path() -> PathBuf {
    directories::ProjectDirs::from("com", "stayhub", "app")
        .map(|dirs| dirs.data_dir().join(DATABASE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DATABASE_FILE_NAME))
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            database_path: default_database_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub booking: BookingLimits,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl AppConfig {
    /// Loads defaults, then the config file (if present), then environment
    /// overrides, and validates the result.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.booking.validate()?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `STAYHUB_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("STAYHUB_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.store.database_path = PathBuf::from(path);
        }

        if let Some(symbol) = lookup("STAYHUB_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }

        override_max(&lookup, "STAYHUB_MAX_ROOMS", &mut self.booking.rooms)?;
        override_max(&lookup, "STAYHUB_MAX_ADULTS", &mut self.booking.adults)?;
        override_max(&lookup, "STAYHUB_MAX_CHILDREN", &mut self.booking.children)?;

        Ok(())
    }

    /// Creates the database directory if it is missing.
    pub fn ensure_data_dir(&self) -> ConfigResult<()> {
        match self.store.database_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                std::fs::create_dir_all(dir).map_err(|source| ConfigError::DataDir {
                    path: dir.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }

    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stayhub", "app")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

fn override_max<F>(lookup: &F, key: &str, bounds: &mut CounterBounds) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(());
    };

    bounds.max = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.clone(),
    })?;
    debug!(key, max = bounds.max, "Overriding counter bound from environment");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.booking, BookingLimits::default());
        assert_eq!(config.display.currency_symbol, "R");
        assert!(config.store.database_path.ends_with(DATABASE_FILE_NAME));
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [booking.rooms]
            min = 1
            max = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.booking.rooms, CounterBounds::new(1, 4));
        assert_eq!(config.booking.children, CounterBounds::new(0, 10));
        assert_eq!(config.display, DisplaySettings::default());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config: AppConfig = toml::from_str(
            r#"
            [store]
            database_path = "/var/lib/stayhub/file.db"
            [display]
            currency_symbol = "$"
            "#,
        )
        .unwrap();

        config
            .apply_env_overrides(env(&[
                ("STAYHUB_DB_PATH", "/tmp/env.db"),
                ("STAYHUB_MAX_CHILDREN", "3"),
            ]))
            .unwrap();

        assert_eq!(config.store.database_path, PathBuf::from("/tmp/env.db"));
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.booking.children.max, 3);
    }

    #[test]
    fn test_bad_env_number() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env_overrides(env(&[("STAYHUB_MAX_ROOMS", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "STAYHUB_MAX_ROOMS"));
    }

    #[test]
    fn test_inverted_limits_rejected() {
        let mut config = AppConfig::default();
        config
            .apply_env_overrides(env(&[("STAYHUB_MAX_ADULTS", "0")]))
            .unwrap();
        assert!(config.booking.validate().is_err());
    }
}
