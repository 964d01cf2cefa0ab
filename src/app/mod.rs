// SPDX-License-Identifier: MPL-2.0
//! Application context.
//!
//! [`App`] is the single owner of the loaded configuration and the
//! localization state. It is built once from [`Flags`] at startup and passed
//! explicitly to whatever needs text.

pub mod paths;
pub mod persistence;

use crate::config::{self, Config};
use crate::error::Result;
use crate::i18n::{I18n, Msg};
use std::path::PathBuf;

/// Startup options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale requested with `--lang`; not persisted.
    pub lang: Option<String>,
    /// Config directory override from `--config-dir`.
    pub config_dir: Option<PathBuf>,
    /// Log filter from `--log-level`.
    pub log_level: Option<String>,
}

#[derive(Debug)]
pub struct App {
    config: Config,
    config_dir: Option<PathBuf>,
    i18n: I18n,
}

impl App {
    /// Loads the configuration and the embedded catalog.
    ///
    /// A broken settings file does not prevent startup: defaults are used and
    /// the returned warning says why.
    pub fn new(flags: &Flags) -> Result<(Self, Option<String>)> {
        let (config, warning) = config::load_with_override(flags.config_dir.clone());
        Ok((Self::with_config(flags, config)?, warning))
    }

    /// Builds the app from an already loaded configuration.
    ///
    /// Lets the caller install logging from `config` before the startup
    /// locale is selected.
    pub fn with_config(flags: &Flags, config: Config) -> Result<Self> {
        let i18n = I18n::new(flags.lang.as_deref(), &config)?;
        Ok(Self {
            config,
            config_dir: flags.config_dir.clone(),
            i18n,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn tr(&self, msg: Msg) -> String {
        self.i18n.tr(msg)
    }

    /// Switches the active locale and stores it as the user's preference.
    ///
    /// Returns `Ok(false)` when the locale is not available.
    pub fn change_language(&mut self, requested: &str) -> Result<bool> {
        persistence::apply_language_change(
            &mut self.i18n,
            &mut self.config,
            self.config_dir.clone(),
            requested,
        )
    }
}
