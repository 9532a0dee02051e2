//! HTTP middleware for axum.
//!
//! - `locale` - locale redirect/rewrite applied ahead of routing

pub mod locale;

pub use locale::{locale_middleware, LocaleRouterState, RequestLocale};
