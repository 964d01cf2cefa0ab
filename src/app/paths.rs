// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions
//!    (`--config-dir` on the command line, or a temp dir in tests)
//! 2. **Environment variable** (`PAIRQUEST_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "PairQuest";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PAIRQUEST_CONFIG_DIR";

/// Returns the application config directory path.
///
/// This directory holds user preferences (`settings.toml`).
///
/// - Linux: `~/.config/PairQuest/`
/// - macOS: `~/Library/Application Support/PairQuest/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\PairQuest\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`)
/// 2. `PAIRQUEST_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory (with app name appended)
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
