// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Preferred language and system locale detection
//! - `[logging]` - Log filter
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PAIRQUEST_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Migration
//!
//! Flat files written by the web client (`locale = "ru"` or `language = "ru"`
//! at the top level) are migrated to the sectioned format when loaded. The
//! next save writes the new format.
//!
//! # Examples
//!
//! ```no_run
//! use pairquest::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("ru".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Preferred UI language code (e.g., "en", "ru").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Consult the OS locale when no language is stored.
    #[serde(default = "default_detect_system_locale")]
    pub detect_system_locale: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            detect_system_locale: DEFAULT_DETECT_SYSTEM_LOCALE,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoggingConfig {
    /// `tracing` filter directive (e.g., "info", "pairquest=debug").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Legacy Config (for migration from flat format)
// =============================================================================

/// Flat preference format written by the web client.
#[derive(Debug, Deserialize)]
struct LegacyConfig {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

impl From<LegacyConfig> for Config {
    fn from(legacy: LegacyConfig) -> Self {
        Config {
            general: GeneralConfig {
                language: legacy.language.or(legacy.locale),
                ..GeneralConfig::default()
            },
            logging: LoggingConfig::default(),
        }
    }
}

fn default_detect_system_locale() -> bool {
    DEFAULT_DETECT_SYSTEM_LOCALE
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// A file with a top-level `general` or `logging` key is read as the
/// sectioned format, however those tables are written (headers, dotted keys,
/// or inline tables). Anything else is migrated from the legacy flat format.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let table: toml::Table = toml::from_str(&content)?;

    if table.contains_key("general") || table.contains_key("logging") {
        let config: Config = toml::Value::Table(table).try_into()?;
        return Ok(config);
    }

    let legacy: LegacyConfig = toml::Value::Table(table).try_into()?;
    Ok(Config::from(legacy))
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
