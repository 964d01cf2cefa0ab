// SPDX-License-Identifier: MPL-2.0
//! Logging setup built on [`tracing`].
//!
//! Filter precedence: `RUST_LOG`, then the `--log-level` flag, then
//! `[logging] level` in `settings.toml`, then [`DEFAULT_LOG_LEVEL`].

use crate::config::{Config, DEFAULT_LOG_LEVEL};
use tracing_subscriber::EnvFilter;

/// Picks the filter directive from the flag and config values.
///
/// Does not look at `RUST_LOG`; [`init`] handles that.
pub fn filter_directive<'a>(cli_level: Option<&'a str>, config: &'a Config) -> &'a str {
    cli_level
        .or(config.logging.level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Installs the global stderr subscriber.
///
/// An invalid directive falls back to [`DEFAULT_LOG_LEVEL`]. Calling this
/// more than once is harmless: later calls leave the first subscriber in place.
pub fn init(cli_level: Option<&str>, config: &Config) {
    let directive = filter_directive(cli_level, config);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
