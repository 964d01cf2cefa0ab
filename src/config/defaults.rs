// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Locale**: Startup and fallback locales
//! - **Logging**: Default log filter

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the command line nor the stored preference
/// selects one.
pub const DEFAULT_LOCALE: &str = "en";

/// Locale consulted when the active locale lacks a message.
///
/// This locale must define every message the application uses.
pub const FALLBACK_LOCALE: &str = "en";

/// Whether the OS locale is consulted when no preference is stored.
pub const DEFAULT_DETECT_SYSTEM_LOCALE: bool = false;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter used when neither `RUST_LOG`, `--log-level`, nor the config
/// file provides one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_LOCALE.is_empty());
    assert!(!FALLBACK_LOCALE.is_empty());
    assert!(!DEFAULT_LOG_LEVEL.is_empty());
};
