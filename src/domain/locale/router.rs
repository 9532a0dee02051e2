//! Locale routing decisions.
//!
//! Every inbound page request is classified once, before any page handler
//! sees it:
//!
//! | Path | Decision |
//! |------|----------|
//! | excluded (assets, `/api`, well-known files) | `Excluded` |
//! | `/en`, `/en/...` (default locale, explicit) | `Redirect` 301 to the unprefixed path |
//! | `/ko`, `/ko/...` (any other supported locale) | `PassThrough` |
//! | anything else | `Rewrite` to `/en` + path, URL unchanged for the client |
//!
//! Unknown prefixes deliberately fall into the last rule.

use serde::Serialize;

use super::{Locale, PathExclusions, SupportedLocales};

/// Outcome of routing one request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RouteDecision {
    /// Not a page request; serve untouched.
    Excluded,

    /// Permanent redirect to the canonical (unprefixed) location.
    Redirect { location: String },

    /// Already locale-qualified; serve unchanged.
    PassThrough { locale: Locale },

    /// Serve `path` internally; the browser keeps its URL.
    Rewrite { path: String, locale: Locale },
}

impl RouteDecision {
    /// Locale the page will render in, if this is a page request.
    pub fn locale(&self) -> Option<Locale> {
        match self {
            RouteDecision::PassThrough { locale } | RouteDecision::Rewrite { locale, .. } => {
                Some(*locale)
            }
            RouteDecision::Excluded | RouteDecision::Redirect { .. } => None,
        }
    }
}

/// Stateless router applying the exclusion filter then rules A–C.
#[derive(Debug, Clone)]
pub struct LocaleRouter {
    locales: SupportedLocales,
    exclusions: PathExclusions,
}

impl LocaleRouter {
    pub fn new(locales: SupportedLocales, exclusions: PathExclusions) -> Self {
        Self { locales, exclusions }
    }

    /// Router with the default `en`/`ko` locales and standard exclusions.
    pub fn standard() -> Self {
        Self::new(SupportedLocales::default(), PathExclusions::standard().clone())
    }

    pub fn locales(&self) -> &SupportedLocales {
        &self.locales
    }

    /// Classifies a request. `query` (without `?`) is carried onto redirect
    /// and rewrite targets.
    pub fn route(&self, path: &str, query: Option<&str>) -> RouteDecision {
        let path = if path.is_empty() { "/" } else { path };

        if self.exclusions.is_excluded(path) {
            return RouteDecision::Excluded;
        }

        let default = self.locales.default_locale();

        if default.is_prefix_of(path) {
            let stripped = site_relative(&path[default.prefix().len()..]);
            return RouteDecision::Redirect {
                location: with_query(&stripped, query),
            };
        }

        if let Some(locale) = self.locales.prefixed().find(|l| l.is_prefix_of(path)) {
            return RouteDecision::PassThrough { locale };
        }

        let rewritten = if path == "/" {
            default.prefix()
        } else if path.starts_with('/') {
            format!("{}{}", default.prefix(), path)
        } else {
            format!("{}/{}", default.prefix(), path)
        };

        RouteDecision::Rewrite {
            path: with_query(&rewritten, query),
            locale: default,
        }
    }
}

impl Default for LocaleRouter {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rebuilds `rest` as a single-slash path so a `Location` built from it can
/// never be read as a protocol-relative (`//host`) URL.
fn site_relative(rest: &str) -> String {
    format!("/{}", rest.trim_start_matches(|c: char| c == '/' || c == '\\'))
}

fn with_query(path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn router() -> LocaleRouter {
        LocaleRouter::standard()
    }

    fn redirect(location: &str) -> RouteDecision {
        RouteDecision::Redirect {
            location: location.to_string(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Rule A - explicit default locale
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn en_root_redirects_to_site_root() {
        assert_eq!(router().route("/en", None), redirect("/"));
        assert_eq!(router().route("/en/", None), redirect("/"));
    }

    #[test]
    fn en_page_redirects_to_unprefixed_page() {
        assert_eq!(router().route("/en/pricing", None), redirect("/pricing"));
        assert_eq!(
            router().route("/en/seo/seoul/gangnam", None),
            redirect("/seo/seoul/gangnam")
        );
    }

    #[test]
    fn redirect_never_points_off_site() {
        assert_eq!(router().route("/en//evil.example", None), redirect("/evil.example"));
        assert_eq!(
            router().route("/en///evil.example/login", Some("next=1")),
            redirect("/evil.example/login?next=1")
        );
        assert_eq!(router().route("/en/\\evil.example", None), redirect("/evil.example"));
    }

    #[test]
    fn redirect_keeps_query_string() {
        assert_eq!(
            router().route("/en/pricing", Some("tier=plus")),
            redirect("/pricing?tier=plus")
        );
    }

    // ════════════════════════════════════════════════════════════════════════
    // Rule B - explicit non-default locale
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn ko_paths_pass_through() {
        let expected = RouteDecision::PassThrough { locale: Locale::Ko };
        assert_eq!(router().route("/ko", None), expected);
        assert_eq!(router().route("/ko/pricing", None), expected);
        assert_eq!(router().route("/ko/", None), expected);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Rule C - no locale prefix
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn unprefixed_page_is_rewritten_to_default_locale() {
        assert_eq!(
            router().route("/pricing", None),
            RouteDecision::Rewrite {
                path: "/en/pricing".to_string(),
                locale: Locale::En
            }
        );
    }

    #[test]
    fn root_is_rewritten_to_default_locale_root() {
        assert_eq!(
            router().route("/", None),
            RouteDecision::Rewrite {
                path: "/en".to_string(),
                locale: Locale::En
            }
        );
    }

    #[test]
    fn lookalike_prefixes_fall_into_rewrite() {
        for path in ["/english", "/kobe", "/enterprise/plans", "/fr/pricing"] {
            match router().route(path, None) {
                RouteDecision::Rewrite { path: target, .. } => {
                    assert_eq!(target, format!("/en{}", path));
                }
                other => panic!("{} routed to {:?}", path, other),
            }
        }
    }

    #[test]
    fn rewrite_keeps_query_string() {
        assert_eq!(
            router().route("/contact", Some("ref=pricing")),
            RouteDecision::Rewrite {
                path: "/en/contact?ref=pricing".to_string(),
                locale: Locale::En
            }
        );
    }

    #[test]
    fn excluded_paths_are_left_alone() {
        assert_eq!(router().route("/api/selection", None), RouteDecision::Excluded);
        assert_eq!(router().route("/robots.txt", None), RouteDecision::Excluded);
        assert_eq!(router().route("/en/hero.png", None), RouteDecision::Excluded);
    }

    #[test]
    fn decision_reports_render_locale() {
        assert_eq!(router().route("/ko/about", None).locale(), Some(Locale::Ko));
        assert_eq!(router().route("/about", None).locale(), Some(Locale::En));
        assert_eq!(router().route("/en/about", None).locale(), None);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════

    fn page_path() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z0-9-]{1,12}", 1..5).prop_map(|segments| format!("/{}", segments.join("/")))
    }

    fn page_path_with_gaps() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z0-9.-]{0,12}", 1..5).prop_map(|segments| format!("/{}", segments.join("/")))
    }

    proptest! {
        #[test]
        fn prop_rule_a_redirect_stays_on_site(page in page_path_with_gaps()) {
            let path = format!("/en{}", page);
            prop_assume!(!PathExclusions::standard().is_excluded(&path));
            match router().route(&path, None) {
                RouteDecision::Redirect { location } => {
                    prop_assert!(location.starts_with('/'));
                    prop_assert!(!location.starts_with("//"));
                    prop_assert_eq!(location, format!("/{}", page.trim_start_matches('/')));
                }
                other => prop_assert!(false, "{} routed to {:?}", path, other),
            }
        }

        #[test]
        fn prop_rule_a_strips_default_prefix(page in page_path()) {
            prop_assume!(!PathExclusions::standard().is_excluded(&page));
            let path = format!("/en{}", page);
            prop_assert_eq!(router().route(&path, None), redirect(&page));
        }

        #[test]
        fn prop_rule_a_is_idempotent(page in page_path()) {
            prop_assume!(!PathExclusions::standard().is_excluded(&page));
            prop_assume!(!Locale::En.is_prefix_of(&page));
            let path = format!("/en{}", page);
            if let RouteDecision::Redirect { location } = router().route(&path, None) {
                let again = router().route(&location, None);
                let is_redirect = matches!(again, RouteDecision::Redirect { .. });
                prop_assert!(!is_redirect);
            }
        }

        #[test]
        fn prop_rule_b_passes_ko_through(page in page_path()) {
            prop_assume!(!PathExclusions::standard().is_excluded(&page));
            let path = format!("/ko{}", page);
            prop_assert_eq!(router().route(&path, None), RouteDecision::PassThrough { locale: Locale::Ko });
        }

        #[test]
        fn prop_rule_c_prefixes_default_locale(page in page_path()) {
            prop_assume!(!PathExclusions::standard().is_excluded(&page));
            prop_assume!(!Locale::En.is_prefix_of(&page) && !Locale::Ko.is_prefix_of(&page));
            let expected = RouteDecision::Rewrite { path: format!("/en{}", page), locale: Locale::En };
            prop_assert_eq!(router().route(&page, None), expected);
        }
    }
}
