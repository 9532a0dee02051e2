//! HTTP adapter - locale routing, page shells and the JSON API.

pub mod app;
pub mod contact;
pub mod error;
pub mod middleware;
pub mod pages;
pub mod selection;
pub mod visitor;

pub use app::{build_app, routes, AppState, HttpOptions, SiteSettings};
pub use error::{set_verbose_errors, ApiError, ErrorResponse};
pub use visitor::{VisitorSession, VISITOR_SESSION_HEADER};
