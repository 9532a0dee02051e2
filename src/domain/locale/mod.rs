//! Locale domain - supported languages and request-path routing.

mod exclusions;
mod language;
mod router;
mod supported;

pub use exclusions::PathExclusions;
pub use language::Locale;
pub use router::{LocaleRouter, RouteDecision};
pub use supported::SupportedLocales;
