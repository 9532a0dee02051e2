//! Locale definitions.
//!
//! The site is published in English (default, unprefixed URLs) and Korean
//! (`/ko`-prefixed URLs).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A language variant of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English - the default locale.
    #[default]
    En,

    /// Korean.
    Ko,
}

impl Locale {
    /// Every locale the code base knows about.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ko];

    /// Returns the URL / language code.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }

    /// Returns the native display name, for the language switcher.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ko => "한국어",
        }
    }

    /// Exact match on a URL segment (`"ko"` → `Ko`, `"KO"` → none).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Lenient parse for config values and `Accept-Language`-style tags.
    ///
    /// Case-insensitive; `_` and `-` region suffixes are ignored (`ko_KR` → `Ko`).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase().replace('_', "-");
        let primary = normalized.split('-').next().unwrap_or_default();
        Self::from_code(primary)
    }

    /// Locale named by the first path segment, falling back to the default.
    pub fn from_path(path: &str) -> Self {
        path.trim_start_matches('/')
            .split('/')
            .next()
            .and_then(Self::from_code)
            .unwrap_or_default()
    }

    /// The path prefix for this locale (`/en`, `/ko`).
    pub fn prefix(&self) -> String {
        format!("/{}", self.code())
    }

    /// True when `path` is exactly this locale's prefix or lives beneath it.
    pub fn is_prefix_of(&self, path: &str) -> bool {
        let prefix = self.prefix();
        match path.strip_prefix(prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| ValidationError::invalid_format("locale", format!("unsupported locale '{}'", s)))
    }
}
