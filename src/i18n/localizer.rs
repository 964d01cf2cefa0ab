// SPDX-License-Identifier: MPL-2.0
//! Active-locale state on top of the [`Catalog`].
//!
//! [`I18n`] owns the catalog and the currently selected locale. It is created
//! once at startup and passed by reference to whatever renders text; switching
//! language takes `&mut I18n`, so every later lookup sees the new locale.

use super::catalog::Catalog;
use super::keys::Msg;
use crate::config::{Config, GeneralConfig, DEFAULT_LOCALE};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct I18n {
    catalog: Catalog,
    current_locale: String,
}

impl I18n {
    /// Loads the embedded catalog and selects the startup locale.
    pub fn new(cli_lang: Option<&str>, config: &Config) -> Result<Self> {
        Ok(Self::with_catalog(Catalog::embedded()?, cli_lang, config))
    }

    /// Selects the startup locale against an existing catalog.
    ///
    /// See [`resolve_locale`] for the selection order.
    pub fn with_catalog(catalog: Catalog, cli_lang: Option<&str>, config: &Config) -> Self {
        let os_locale = if config.general.detect_system_locale {
            sys_locale::get_locale()
        } else {
            None
        };

        let current_locale = resolve_locale(cli_lang, &config.general, os_locale, &catalog)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        tracing::debug!(locale = %current_locale, "selected startup locale");

        Self {
            catalog,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &str {
        &self.current_locale
    }

    pub fn available_locales(&self) -> Vec<&str> {
        self.catalog.available_locales()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Switches the active locale.
    ///
    /// The request is negotiated against the catalog (`ru-RU` selects `ru`).
    /// Returns `false` and keeps the current locale when no loaded locale
    /// matches.
    pub fn set_locale(&mut self, requested: &str) -> bool {
        let Some(locale) = self.catalog.negotiate(requested) else {
            tracing::warn!(requested, "ignoring unknown locale");
            return false;
        };
        if locale != self.current_locale {
            tracing::info!(from = %self.current_locale, to = locale, "switching locale");
            self.current_locale = locale.to_string();
        }
        true
    }

    pub fn tr(&self, msg: Msg) -> String {
        self.tr_path(msg.path(), &[])
    }

    pub fn tr_with_args(&self, msg: Msg, args: &[(&str, &str)]) -> String {
        self.tr_path(msg.path(), args)
    }

    /// Resolves a dotted key path in the active locale.
    ///
    /// Falls back to the fallback locale, then to the key path itself.
    pub fn tr_path(&self, path: &str, args: &[(&str, &str)]) -> String {
        if !self.catalog.contains(&self.current_locale, path) {
            if self.catalog.lookup(&self.current_locale, path).is_some() {
                tracing::debug!(
                    locale = %self.current_locale,
                    fallback = self.catalog.fallback_locale(),
                    key = path,
                    "using fallback translation"
                );
            } else {
                tracing::debug!(locale = %self.current_locale, key = path, "missing translation");
            }
        }
        self.catalog.resolve(&self.current_locale, path, args)
    }
}

/// Picks the startup locale.
///
/// Tried in order, each negotiated against the catalog:
/// 1. `--lang` from the command line
/// 2. the stored language preference
/// 3. the OS locale, when provided
///
/// Returns `None` when nothing matches; callers then use the default locale.
fn resolve_locale(
    cli_lang: Option<&str>,
    general: &GeneralConfig,
    os_locale: Option<String>,
    catalog: &Catalog,
) -> Option<String> {
    let candidates = [
        cli_lang.map(str::to_string),
        general.language.clone(),
        os_locale,
    ];

    candidates
        .into_iter()
        .flatten()
        .find_map(|requested| catalog.negotiate(&requested).map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn catalog() -> Catalog {
        Catalog::embedded().expect("embedded catalog should load")
    }

    fn config_with_language(language: &str) -> Config {
        let mut config = Config::default();
        config.general.language = Some(language.to_string());
        config
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = config_with_language("en");
        let lang = resolve_locale(Some("ru"), &config.general, None, &catalog());
        assert_eq!(lang.as_deref(), Some("ru"));
    }

    #[test]
    fn test_resolve_locale_config() {
        let config = config_with_language("ru");
        let lang = resolve_locale(None, &config.general, None, &catalog());
        assert_eq!(lang.as_deref(), Some("ru"));
    }

    #[test]
    fn test_resolve_locale_skips_unknown_cli_value() {
        let config = config_with_language("ru");
        let lang = resolve_locale(Some("fr"), &config.general, None, &catalog());
        assert_eq!(lang.as_deref(), Some("ru"));
    }

    #[test]
    fn test_resolve_locale_os() {
        let config = Config::default();
        let lang = resolve_locale(None, &config.general, Some("ru-RU".to_string()), &catalog());
        assert_eq!(lang.as_deref(), Some("ru"));
    }

    #[test]
    fn test_resolve_locale_nothing_matches() {
        let config = config_with_language("ja");
        let lang = resolve_locale(None, &config.general, Some("de-DE".to_string()), &catalog());
        assert_eq!(lang, None);
    }

    #[test]
    fn no_preference_selects_default_locale() {
        let i18n = I18n::with_catalog(catalog(), None, &Config::default());
        assert_eq!(i18n.current_locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn stored_preference_selects_locale() {
        let i18n = I18n::with_catalog(catalog(), None, &config_with_language("ru"));
        assert_eq!(i18n.current_locale(), "ru");
        assert_eq!(i18n.tr(Msg::StartGame), "Начать игру 💖");
    }

    #[test]
    fn switching_locale_is_visible_to_next_lookup() {
        let mut i18n = I18n::with_catalog(catalog(), None, &Config::default());
        assert_eq!(i18n.tr(Msg::StartGame), "Start Game 💖");

        assert!(i18n.set_locale("ru"));
        assert_eq!(i18n.current_locale(), "ru");
        assert_eq!(i18n.tr(Msg::StartGame), "Начать игру 💖");
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let mut i18n = I18n::with_catalog(catalog(), Some("ru"), &Config::default());
        assert!(!i18n.set_locale("fr"));
        assert_eq!(i18n.current_locale(), "ru");
    }

    #[test]
    fn regional_locale_is_negotiated() {
        let mut i18n = I18n::with_catalog(catalog(), None, &Config::default());
        assert!(i18n.set_locale("ru-RU"));
        assert_eq!(i18n.current_locale(), "ru");
    }

    #[test]
    fn tr_with_args_substitutes_error() {
        let i18n = I18n::with_catalog(catalog(), None, &Config::default());
        assert_eq!(
            i18n.tr_with_args(Msg::ErrorGeneral, &[("error", "x")]),
            "An error occurred: x."
        );
    }

    #[test]
    fn tr_path_echoes_unknown_key() {
        let i18n = I18n::with_catalog(catalog(), Some("ru"), &Config::default());
        assert_eq!(i18n.tr_path("lobby.title", &[]), "lobby.title");
    }

    #[test]
    fn tr_path_falls_back_for_partial_locale() {
        let catalog = Catalog::from_sources(
            "en",
            [
                ("en", "startGame = \"Start Game\"\nnextRound = \"Next round\""),
                ("ru", "startGame = \"Начать игру\""),
            ],
        )
        .unwrap();
        let i18n = I18n::with_catalog(catalog, Some("ru"), &Config::default());
        assert_eq!(i18n.tr_path("startGame", &[]), "Начать игру");
        assert_eq!(i18n.tr_path("nextRound", &[]), "Next round");
    }
}
