// SPDX-License-Identifier: MPL-2.0
use pairquest::app::{App, Flags};
use pairquest::config::{self, Config, FALLBACK_LOCALE};
use pairquest::i18n::tree::MessageTree;
use pairquest::i18n::{Catalog, I18n, Msg};
use tempfile::tempdir;

fn embedded() -> Catalog {
    Catalog::embedded().expect("embedded catalog should load")
}

#[test]
fn every_fallback_key_resolves_to_non_empty_text() {
    let catalog = embedded();
    for msg in Msg::ALL {
        let text = catalog.resolve(FALLBACK_LOCALE, msg.path(), &[]);
        assert!(!text.is_empty(), "{} resolved to empty text", msg);
        assert_ne!(text, msg.path(), "{} is missing from the fallback", msg);
    }
}

#[test]
fn locale_strings_win_over_fallback() {
    let catalog = embedded();
    let ru = MessageTree::from_toml(include_str!("../assets/i18n/ru.toml"))
        .expect("ru.toml should parse");

    for path in ru.leaf_paths() {
        let own = ru.lookup(&path).expect("leaf path should resolve");
        assert_eq!(catalog.resolve("ru", &path, &[]), own);
    }
    assert_eq!(catalog.resolve("ru", "countdown.nextButton", &[]), "Далее");
}

#[test]
fn keys_absent_from_a_locale_use_fallback_text() {
    let en = include_str!("../assets/i18n/en.toml");
    let partial_ru = "startGame = \"Начать игру 💖\"";
    let catalog = Catalog::from_sources("en", [("en", en), ("ru", partial_ru)])
        .expect("catalog should load");

    assert_eq!(catalog.resolve("ru", "startGame", &[]), "Начать игру 💖");
    assert_eq!(
        catalog.resolve("ru", "countdown.connectionLost", &[]),
        "Connection lost. Attempting to reconnect..."
    );
    assert_eq!(catalog.missing_keys("ru").len(), Msg::ALL.len() - 1);
}

#[test]
fn error_placeholder_is_substituted() {
    let catalog = embedded();
    assert_eq!(
        catalog.resolve("en", "errorGeneral", &[("error", "x")]),
        "An error occurred: x."
    );
    assert_eq!(
        catalog.resolve("ru", "errorGeneral", &[("error", "x")]),
        "Произошла ошибка: x."
    );
    assert_eq!(
        catalog.resolve("en", "errorGeneral", &[]),
        "An error occurred: {error}."
    );
}

#[test]
fn resolution_is_repeatable() {
    let catalog = embedded();
    for locale in ["en", "ru", "de", ""] {
        for msg in Msg::ALL {
            let params = [("error", "timeout")];
            assert_eq!(
                catalog.resolve(locale, msg.path(), &params),
                catalog.resolve(locale, msg.path(), &params)
            );
        }
    }
}

#[test]
fn switching_to_russian_changes_start_game_label() {
    let mut i18n = I18n::new(Some("en"), &Config::default()).expect("embedded catalog");
    assert_eq!(i18n.tr(Msg::StartGame), "Start Game 💖");

    assert!(i18n.set_locale("ru"));

    assert_eq!(i18n.tr_path("startGame", &[]), "Начать игру 💖");
}

#[test]
fn unknown_key_in_both_locales_echoes_key_path() {
    let catalog = embedded();
    assert_eq!(catalog.resolve("ru", "lobby.heading", &[]), "lobby.heading");
    assert_eq!(catalog.resolve("xx", "countdown", &[]), "countdown");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let flags = Flags {
        config_dir: Some(dir.path().to_path_buf()),
        ..Flags::default()
    };

    let (mut app, _) = App::new(&flags).expect("app should start");
    assert_eq!(app.i18n().current_locale(), "en");
    assert!(app.change_language("ru").expect("save should succeed"));

    let loaded = config::load_from_path(&dir.path().join(config::CONFIG_FILE))
        .expect("Failed to load saved config");
    assert_eq!(loaded.general.language.as_deref(), Some("ru"));

    let i18n_ru = I18n::new(None, &loaded).expect("embedded catalog");
    assert_eq!(i18n_ru.current_locale(), "ru");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn legacy_web_preference_is_honoured() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join(config::CONFIG_FILE), "locale = \"ru\"\n")
        .expect("Failed to write legacy settings");

    let flags = Flags {
        config_dir: Some(dir.path().to_path_buf()),
        ..Flags::default()
    };
    let (app, warning) = App::new(&flags).expect("app should start");

    assert!(warning.is_none());
    assert_eq!(app.tr(Msg::CountdownNextButton), "Далее");
}
