//! Locale configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::locale::{Locale, SupportedLocales};

/// Locale configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Default locale code; served without a URL prefix
    #[serde(default = "default_locale")]
    pub default: String,

    /// Supported locale codes (comma-separated, default first)
    #[serde(default = "default_supported")]
    pub supported: String,
}

impl LocaleConfig {
    /// Parses the configured codes into the router's locale list.
    pub fn supported_locales(&self) -> Result<SupportedLocales, ValidationError> {
        let default = parse_locale(&self.default)?;
        let codes = self
            .supported
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(parse_locale)
            .collect::<Result<Vec<_>, _>>()?;

        match codes.split_first() {
            Some((first, rest)) if *first == default => {
                SupportedLocales::new(default, rest.iter().copied())
                    .map_err(|_| ValidationError::DuplicateLocale)
            }
            Some(_) => Err(ValidationError::DefaultLocaleNotFirst),
            None => SupportedLocales::new(default, std::iter::empty()).map_err(|_| ValidationError::DuplicateLocale),
        }
    }

    /// Validate locale configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.supported_locales().map(|_| ())
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default: default_locale(),
            supported: default_supported(),
        }
    }
}

fn parse_locale(code: &str) -> Result<Locale, ValidationError> {
    Locale::parse(code).ok_or_else(|| ValidationError::UnsupportedLocale(code.to_string()))
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_supported() -> String {
    "en,ko".to_string()
}
