// SPDX-License-Identifier: MPL-2.0
use pairquest::app::{App, Flags};
use pairquest::i18n::Msg;
use pairquest::{config, logging};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
pairquest - localized text for the PairQuest game

USAGE:
  pairquest [OPTIONS] [COMMAND]

OPTIONS:
  --lang CODE         Use CODE for this run without saving it
  --config-dir DIR    Read and write settings.toml in DIR
  --log-level LEVEL   Log filter (overridden by RUST_LOG)
  -h, --help          Print this help

COMMANDS:
  (none)                    Print the home screen text
  get KEY [NAME=VALUE ...]  Resolve KEY in the active locale
  set-lang CODE             Switch to CODE and save it as the preference
  locales                   List available locales
  check                     Verify every locale defines every message
";

#[derive(Debug, PartialEq)]
enum Command {
    Home,
    Get {
        key: String,
        params: Vec<(String, String)>,
    },
    SetLang(String),
    Locales,
    Check,
}

impl Command {
    fn parse(args: &[String]) -> Result<Self, String> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Home);
        };

        match (name.as_str(), rest) {
            ("get", [key, params @ ..]) => Ok(Command::Get {
                key: key.clone(),
                params: params
                    .iter()
                    .map(|param| parse_param(param))
                    .collect::<Result<_, _>>()?,
            }),
            ("get", []) => Err("get requires a KEY".to_string()),
            ("set-lang", [code]) => Ok(Command::SetLang(code.clone())),
            ("set-lang", _) => Err("set-lang requires exactly one CODE".to_string()),
            ("locales", []) => Ok(Command::Locales),
            ("check", []) => Ok(Command::Check),
            (other, _) => Err(format!("unexpected arguments starting at '{}'", other)),
        }
    }
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

/// Converts the positional arguments, rejecting any that are not UTF-8.
fn utf8_args(raw: Vec<OsString>) -> Result<Vec<String>, String> {
    raw.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|bad| format!("argument is not valid UTF-8: {}", bad.to_string_lossy()))
        })
        .collect()
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir")?,
        log_level: args.opt_value_from_str("--log-level")?,
    })
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            return ExitCode::FAILURE;
        }
    };

    let command = match utf8_args(args.finish()).and_then(|rest| Command::parse(&rest)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            return ExitCode::FAILURE;
        }
    };

    let (config, warning) = config::load_with_override(flags.config_dir.clone());
    logging::init(flags.log_level.as_deref(), &config);
    if let Some(warning) = warning {
        tracing::warn!("{}", warning);
    }

    let mut app = match App::with_config(&flags, config) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    run(&mut app, command)
}

fn run(app: &mut App, command: Command) -> ExitCode {
    match command {
        Command::Home => {
            println!("{}", app.tr(Msg::Title));
            println!("{}", app.tr(Msg::Description));
            ExitCode::SUCCESS
        }
        Command::Get { key, params } => {
            let params: Vec<(&str, &str)> = params
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            let text = match Msg::from_path(&key) {
                Some(msg) => app.i18n().tr_with_args(msg, &params),
                None => {
                    tracing::warn!(key = %key, "not a known message key");
                    app.i18n().tr_path(&key, &params)
                }
            };
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Command::SetLang(code) => match app.change_language(&code) {
            Ok(true) => {
                println!("{}", app.i18n().current_locale());
                ExitCode::SUCCESS
            }
            Ok(false) => {
                eprintln!(
                    "error: unknown locale '{}' (available: {})",
                    code,
                    app.i18n().available_locales().join(", ")
                );
                ExitCode::FAILURE
            }
            Err(err) => {
                eprintln!("error: {}", err);
                ExitCode::FAILURE
            }
        },
        Command::Locales => {
            let i18n = app.i18n();
            let fallback = i18n.catalog().fallback_locale();
            for locale in i18n.available_locales() {
                let active = if locale == i18n.current_locale() { "*" } else { " " };
                let note = if locale == fallback { " (fallback)" } else { "" };
                println!("{} {}{}", active, locale, note);
            }
            ExitCode::SUCCESS
        }
        Command::Check => {
            let catalog = app.i18n().catalog();
            for locale in catalog.available_locales() {
                let missing = catalog.missing_keys(locale);
                if missing.is_empty() {
                    println!("{}: complete", locale);
                } else {
                    println!("{}: missing {}", locale, missing.join(", "));
                }
            }
            match catalog.validate() {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("error: {}", err);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn no_arguments_is_home() {
        assert_eq!(Command::parse(&[]), Ok(Command::Home));
    }

    #[test]
    fn get_collects_params() {
        assert_eq!(
            Command::parse(&args(&["get", "errorGeneral", "error=x"])),
            Ok(Command::Get {
                key: "errorGeneral".to_string(),
                params: vec![("error".to_string(), "x".to_string())],
            })
        );
    }

    #[test]
    fn param_value_may_contain_equals() {
        assert_eq!(
            parse_param("error=a=b"),
            Ok(("error".to_string(), "a=b".to_string()))
        );
    }

    #[test]
    fn malformed_param_is_rejected() {
        assert!(Command::parse(&args(&["get", "errorGeneral", "oops"])).is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn set_lang_requires_one_code() {
        assert_eq!(
            Command::parse(&args(&["set-lang", "ru"])),
            Ok(Command::SetLang("ru".to_string()))
        );
        assert!(Command::parse(&args(&["set-lang"])).is_err());
        assert!(Command::parse(&args(&["set-lang", "ru", "en"])).is_err());
    }

    #[test]
    fn utf8_arguments_pass_through_in_order() {
        let raw = vec![
            OsString::from("get"),
            OsString::from("errorGeneral"),
            OsString::from("error=x"),
        ];
        assert_eq!(utf8_args(raw), Ok(args(&["get", "errorGeneral", "error=x"])));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_an_error() {
        use std::os::unix::ffi::OsStringExt;

        let raw = vec![
            OsString::from("get"),
            OsString::from("errorGeneral"),
            OsString::from_vec(vec![0x66, 0x6f, 0x80]),
            OsString::from("error=x"),
        ];
        assert!(utf8_args(raw).is_err());
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Command::parse(&args(&["play"])).is_err());
        assert!(Command::parse(&args(&["locales", "extra"])).is_err());
    }
}
