// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Saves the language preference to disk whenever the user switches locale.

use crate::config::{self, Config};
use crate::error::Result;
use crate::i18n::I18n;
use std::path::PathBuf;

/// Applies the newly selected locale and persists it to config.
///
/// Returns `Ok(false)` without touching the config when the locale is not
/// available. The stored value is the catalog locale actually selected
/// (`ru` for a request of `ru-RU`).
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    config_dir: Option<PathBuf>,
    requested: &str,
) -> Result<bool> {
    if !i18n.set_locale(requested) {
        return Ok(false);
    }

    config.general.language = Some(i18n.current_locale().to_string());
    config::save_with_override(config, config_dir)?;
    tracing::debug!(locale = i18n.current_locale(), "saved language preference");
    Ok(true)
}
