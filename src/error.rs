// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

/// Problems found while building or validating the locale catalog.
///
/// These only surface at startup or from `check`; message resolution itself
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Embedded file name is not a valid language identifier.
    InvalidLocale(String),

    /// Locale file could not be parsed as a message tree.
    Parse { locale: String, message: String },

    /// Locale file root is a plain string instead of a table.
    RootNotTable(String),

    /// The designated fallback locale has no messages.
    MissingFallback(String),

    /// The fallback locale lacks keys that the application uses.
    IncompleteFallback {
        locale: String,
        missing: Vec<&'static str>,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidLocale(locale) => write!(f, "invalid locale code: {}", locale),
            CatalogError::Parse { locale, message } => {
                write!(f, "failed to parse locale '{}': {}", locale, message)
            }
            CatalogError::RootNotTable(locale) => {
                write!(f, "locale '{}' must be a table of messages", locale)
            }
            CatalogError::MissingFallback(locale) => {
                write!(f, "fallback locale '{}' is not loaded", locale)
            }
            CatalogError::IncompleteFallback { locale, missing } => write!(
                f,
                "fallback locale '{}' is missing {} key(s): {}",
                locale,
                missing.len(),
                missing.join(", ")
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
