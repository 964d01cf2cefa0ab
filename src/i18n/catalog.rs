// SPDX-License-Identifier: MPL-2.0
//! Locale catalog and message resolution with fallback.
//!
//! The catalog maps locale codes to [`MessageTree`]s and designates one
//! locale as the fallback. It is built once at startup and never mutated
//! afterwards, so a shared reference can be handed to any reader.
//!
//! # Resolution
//!
//! 1. Look the key path up in the requested locale.
//! 2. If the locale is unknown or does not define the path, look it up in the
//!    fallback locale.
//! 3. If neither defines it, the key path itself is returned.
//!
//! Placeholder substitution is applied after a string has been found; see
//! [`interpolate`](super::interpolate::interpolate).

use super::interpolate::interpolate;
use super::keys::Msg;
use super::tree::MessageTree;
use crate::config::FALLBACK_LOCALE;
use crate::error::{CatalogError, Result};
use rust_embed::RustEmbed;
use std::collections::BTreeMap;
use unic_langid::LanguageIdentifier;

/// File extension of embedded locale files.
const LOCALE_FILE_EXTENSION: &str = ".toml";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

#[derive(Debug, Clone)]
pub struct Catalog {
    locales: BTreeMap<String, MessageTree>,
    fallback: String,
}

impl Catalog {
    /// Creates an empty catalog with the given fallback locale.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            locales: BTreeMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Builds the catalog from the locale files compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut catalog = Self::new(FALLBACK_LOCALE);

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename.strip_suffix(LOCALE_FILE_EXTENSION) else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let text = std::str::from_utf8(content.data.as_ref()).map_err(|err| {
                CatalogError::Parse {
                    locale: locale.to_string(),
                    message: err.to_string(),
                }
            })?;
            catalog.add_source(locale, text)?;
        }

        if !catalog.has_locale(&catalog.fallback) {
            return Err(CatalogError::MissingFallback(catalog.fallback.clone()).into());
        }
        Ok(catalog)
    }

    /// Builds a catalog from `(locale, toml)` pairs.
    pub fn from_sources<'a, I>(fallback: impl Into<String>, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut catalog = Self::new(fallback);
        for (locale, content) in sources {
            catalog.add_source(locale, content)?;
        }
        Ok(catalog)
    }

    /// Parses a TOML locale file and adds it under `locale`.
    pub fn add_source(&mut self, locale: &str, content: &str) -> Result<()> {
        let tree = MessageTree::from_toml(content).map_err(|err| CatalogError::Parse {
            locale: locale.to_string(),
            message: err.to_string(),
        })?;
        self.add_locale(locale, tree)
    }

    /// Adds (or replaces) the messages for `locale`.
    ///
    /// The locale code must be a valid language identifier and the tree must
    /// be a table.
    pub fn add_locale(&mut self, locale: &str, tree: MessageTree) -> Result<()> {
        if locale.parse::<LanguageIdentifier>().is_err() {
            return Err(CatalogError::InvalidLocale(locale.to_string()).into());
        }
        if !tree.is_branch() {
            return Err(CatalogError::RootNotTable(locale.to_string()).into());
        }
        self.locales.insert(locale.to_string(), tree);
        Ok(())
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback
    }

    /// Loaded locale codes, sorted.
    pub fn available_locales(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Whether `locale` itself defines `path`, without consulting the fallback.
    pub fn contains(&self, locale: &str, path: &str) -> bool {
        self.locales
            .get(locale)
            .is_some_and(|tree| tree.contains(path))
    }

    /// Raw string for `path`, consulting the fallback locale when needed.
    ///
    /// Returns `None` when neither `locale` nor the fallback defines `path`.
    pub fn lookup(&self, locale: &str, path: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|tree| tree.lookup(path))
            .or_else(|| {
                self.locales
                    .get(&self.fallback)
                    .and_then(|tree| tree.lookup(path))
            })
    }

    /// Resolves `path` for `locale` and substitutes `params`.
    ///
    /// Never fails: an unresolvable path yields the path itself.
    pub fn resolve(&self, locale: &str, path: &str, params: &[(&str, &str)]) -> String {
        match self.lookup(locale, path) {
            Some(template) => interpolate(template, params),
            None => path.to_string(),
        }
    }

    /// Typed keys that `locale` does not define itself.
    ///
    /// An unknown locale is missing every key.
    pub fn missing_keys(&self, locale: &str) -> Vec<&'static str> {
        Msg::ALL
            .iter()
            .map(|msg| msg.path())
            .filter(|path| !self.contains(locale, path))
            .collect()
    }

    /// Checks that the fallback locale is loaded and defines every typed key.
    pub fn validate(&self) -> Result<()> {
        if !self.has_locale(&self.fallback) {
            return Err(CatalogError::MissingFallback(self.fallback.clone()).into());
        }
        let missing = self.missing_keys(&self.fallback);
        if !missing.is_empty() {
            return Err(CatalogError::IncompleteFallback {
                locale: self.fallback.clone(),
                missing,
            }
            .into());
        }
        Ok(())
    }

    /// Maps a requested locale code onto a loaded locale.
    ///
    /// Tries an exact identifier match first (`ru` for `ru`), then a match on
    /// the language subtag alone (`ru` for `ru-RU`). Returns `None` for
    /// unparseable codes or languages the catalog does not have.
    pub fn negotiate(&self, requested: &str) -> Option<&str> {
        let requested: LanguageIdentifier = requested.parse().ok()?;

        let loaded: Vec<(&str, LanguageIdentifier)> = self
            .locales
            .keys()
            .filter_map(|code| {
                code.parse::<LanguageIdentifier>()
                    .ok()
                    .map(|id| (code.as_str(), id))
            })
            .collect();

        loaded
            .iter()
            .find(|(_, id)| *id == requested)
            .or_else(|| {
                loaded
                    .iter()
                    .find(|(_, id)| id.language == requested.language)
            })
            .map(|(code, _)| *code)
    }
}
