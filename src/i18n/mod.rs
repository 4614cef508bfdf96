//! Internationalization
//!
//! The active display language, the bundled string catalogs and the store that persists the
//! language choice between sessions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod catalog;
pub mod store;

pub use catalog::{Catalog, Catalogs};
pub use store::{LANGUAGE_KEY, LanguageStore, Persistence};

/// Errors raised while resolving languages or loading catalogs.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The code is not one of the supported languages
    #[error("unsupported language: {0:?}")]
    UnsupportedLanguage(String),

    /// A bundled catalog failed to parse
    #[error("failed to parse {language} catalog: {source}")]
    Catalog {
        /// Language of the broken bundle
        language: Language,

        /// Underlying YAML error
        source: serde_norway::Error,
    },
}

/// A supported display language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Language {
    /// Russian, the default
    #[default]
    #[serde(rename = "RU")]
    Ru,

    /// Romanian
    #[serde(rename = "RO")]
    Ro,

    /// English
    #[serde(rename = "EN")]
    En,
}

impl Language {
    /// Every supported language, in switcher order.
    pub const ALL: [Language; 3] = [Language::Ru, Language::Ro, Language::En];

    /// The code persisted to storage and shown in the switcher.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "RU",
            Language::Ro => "RO",
            Language::En => "EN",
        }
    }

    /// Resolve a persisted value, falling back to the default for anything unsupported.
    pub fn from_persisted(value: Option<&str>) -> Self {
        value
            .and_then(|code| code.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| I18nError::UnsupportedLanguage(code.to_string()))
    }
}
