// SPDX-License-Identifier: MPL-2.0
//! `pairquest` holds the localized text of the PairQuest couples game.
//!
//! It provides an embedded English/Russian message catalog with fallback and
//! `{name}` placeholders, locale selection from a stored preference, and
//! persistence of the user's language choice.

#![doc(html_root_url = "https://docs.rs/pairquest/0.3.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
