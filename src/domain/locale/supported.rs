//! The ordered set of locales the site serves, and URL helpers built on it.

use serde::Serialize;

use super::Locale;
use crate::domain::foundation::ValidationError;

/// Locales served by the site, default first.
///
/// Fixed at startup. The default locale is never shown as a URL prefix on
/// canonical URLs; every other locale always is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedLocales {
    locales: Vec<Locale>,
}

impl SupportedLocales {
    /// Builds the set from a default and the remaining locales.
    ///
    /// Duplicates (including a repeat of the default) are rejected.
    pub fn new(default: Locale, others: impl IntoIterator<Item = Locale>) -> Result<Self, ValidationError> {
        let mut locales = vec![default];
        for locale in others {
            if locales.contains(&locale) {
                return Err(ValidationError::invalid_format(
                    "supported_locales",
                    format!("locale '{}' listed twice", locale),
                ));
            }
            locales.push(locale);
        }
        Ok(Self { locales })
    }

    /// The default locale.
    pub fn default_locale(&self) -> Locale {
        self.locales[0]
    }

    /// Every non-default locale, in configured order.
    pub fn prefixed(&self) -> impl Iterator<Item = Locale> + '_ {
        self.locales.iter().skip(1).copied()
    }

    /// All locales, default first.
    pub fn all(&self) -> &[Locale] {
        &self.locales
    }

    pub fn contains(&self, locale: Locale) -> bool {
        self.locales.contains(&locale)
    }

    /// Splits an explicit supported locale prefix off a path.
    ///
    /// `/ko/pricing` → `(Some(Ko), "/pricing")`, `/ko` → `(Some(Ko), "/")`,
    /// `/pricing` → `(None, "/pricing")`.
    pub fn strip_locale<'a>(&self, path: &'a str) -> (Option<Locale>, &'a str) {
        for locale in &self.locales {
            if locale.is_prefix_of(path) {
                let rest = &path[locale.prefix().len()..];
                let rest = if rest.is_empty() { "/" } else { rest };
                return (Some(*locale), rest);
            }
        }
        (None, path)
    }

    /// Locale a public path is rendered in (unprefixed paths are the default).
    pub fn locale_of_path(&self, path: &str) -> Locale {
        self.strip_locale(path).0.unwrap_or_else(|| self.default_locale())
    }

    /// Canonical public URL of a locale-free page path in `locale`.
    ///
    /// `(En, "/pricing")` → `/pricing`; `(Ko, "/pricing")` → `/ko/pricing`;
    /// `(Ko, "/")` → `/ko`.
    pub fn localized_path(&self, locale: Locale, page_path: &str) -> String {
        let page_path = normalize(page_path);
        if locale == self.default_locale() {
            return page_path;
        }
        if page_path == "/" {
            locale.prefix()
        } else {
            format!("{}{}", locale.prefix(), page_path)
        }
    }

    /// Canonical URL of the same page in another locale (language switcher).
    pub fn switch_locale(&self, path: &str, target: Locale) -> String {
        let path = normalize(path);
        let (_, page) = self.strip_locale(&path);
        self.localized_path(target, page)
    }
}

impl Default for SupportedLocales {
    fn default() -> Self {
        Self {
            locales: vec![Locale::En, Locale::Ko],
        }
    }
}

fn normalize(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
