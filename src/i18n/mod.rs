// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Messages live in per-locale TOML files embedded at build time. Each file is
//! a nested table of strings, addressed by dotted key paths.
//!
//! # Features
//!
//! - Locale selection from CLI, stored preference, or (opt-in) system settings
//! - Runtime language switching
//! - Fallback to the default locale when a translation is missing
//! - `{name}` placeholder substitution

pub mod catalog;
pub mod interpolate;
pub mod keys;
pub mod localizer;
pub mod tree;

pub use catalog::Catalog;
pub use keys::Msg;
pub use localizer::I18n;
