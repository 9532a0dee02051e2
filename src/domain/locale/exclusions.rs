//! Paths that never go through locale routing.
//!
//! Static assets, API routes and well-known root files are served as-is.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static STANDARD: Lazy<PathExclusions> = Lazy::new(|| {
    PathExclusions::new()
        .with_prefix("api")
        .with_prefix("_next")
        .with_prefix("static")
        .with_prefix("assets")
        .with_file("favicon.ico")
        .with_file("manifest.json")
        .with_file("site.webmanifest")
        .with_file("robots.txt")
        .with_file("sitemap.xml")
        .with_extensions(["png", "jpg", "jpeg", "gif", "svg", "webp", "ico", "avif"])
});

/// Exclusion filter evaluated before any locale rule.
#[derive(Debug, Clone, Default)]
pub struct PathExclusions {
    prefixes: Vec<String>,
    files: HashSet<String>,
    extensions: HashSet<String>,
}

impl PathExclusions {
    /// An empty filter (nothing excluded).
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's standard exclusion list.
    pub fn standard() -> &'static PathExclusions {
        &STANDARD
    }

    /// Excludes a top-level directory and everything beneath it.
    pub fn with_prefix(mut self, segment: impl Into<String>) -> Self {
        self.prefixes.push(segment.into().trim_matches('/').to_string());
        self
    }

    /// Excludes a single file at the site root.
    pub fn with_file(mut self, name: impl Into<String>) -> Self {
        self.files.insert(name.into().trim_start_matches('/').to_string());
        self
    }

    /// Excludes any path whose last segment has one of these extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions
            .extend(extensions.into_iter().map(|e| e.into().to_ascii_lowercase()));
        self
    }

    /// True when `path` must bypass locale routing.
    pub fn is_excluded(&self, path: &str) -> bool {
        let relative = path.trim_start_matches('/');

        let under_prefix = self.prefixes.iter().any(|prefix| {
            relative == prefix
                || relative
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        });
        if under_prefix || self.files.contains(relative) {
            return true;
        }

        let last_segment = relative.rsplit('/').next().unwrap_or_default();
        match last_segment.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                self.extensions.contains(&ext.to_ascii_lowercase())
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excluded(path: &str) -> bool {
        PathExclusions::standard().is_excluded(path)
    }

    #[test]
    fn api_routes_are_excluded() {
        assert!(excluded("/api"));
        assert!(excluded("/api/selection"));
        assert!(!excluded("/apis"));
        assert!(!excluded("/ko/api-guide"));
    }

    #[test]
    fn framework_assets_are_excluded() {
        assert!(excluded("/_next/static/chunks/main.js"));
        assert!(excluded("/static/app.css"));
        assert!(excluded("/assets/fonts/inter.woff2"));
    }

    #[test]
    fn well_known_files_are_excluded_at_root() {
        for file in ["/favicon.ico", "/manifest.json", "/site.webmanifest", "/robots.txt", "/sitemap.xml"] {
            assert!(excluded(file), "{} should be excluded", file);
        }
    }

    #[test]
    fn image_extensions_are_excluded_anywhere() {
        assert!(excluded("/images/hero.PNG"));
        assert!(excluded("/ko/og/cover.webp"));
        assert!(excluded("/logo.svg"));
    }

    #[test]
    fn pages_are_not_excluded() {
        assert!(!excluded("/"));
        assert!(!excluded("/pricing"));
        assert!(!excluded("/en/pricing"));
        assert!(!excluded("/ko/seo/seoul"));
        assert!(!excluded("/.png"));
    }

    #[test]
    fn custom_filter_only_matches_what_it_was_given() {
        let filter = PathExclusions::new().with_prefix("/internal/");
        assert!(filter.is_excluded("/internal/metrics"));
        assert!(!filter.is_excluded("/robots.txt"));
    }
}
