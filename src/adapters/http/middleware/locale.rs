//! Locale routing middleware for axum.
//!
//! Applies the [`LocaleRouter`] decision to every request before routing:
//!
//! ```text
//! /en/pricing   → 301 Location: /pricing
//! /ko/pricing   → served as-is, Locale::Ko
//! /pricing      → served as /en/pricing, browser URL unchanged
//! /api/...      → untouched
//! ```
//!
//! Because the URI is rewritten, the middleware has to run before the router
//! matches a route. Layer it on a router whose only service is the fallback:
//!
//! ```ignore
//! let app = Router::new()
//!     .fallback_service(routes)
//!     .layer(middleware::from_fn_with_state(router, locale_middleware));
//! ```
//!
//! Page requests get the chosen [`Locale`] as a request extension and a
//! `Content-Language` response header.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::domain::locale::{Locale, LocaleRouter, RouteDecision};

/// Locale middleware state.
pub type LocaleRouterState = Arc<LocaleRouter>;

/// Redirects, rewrites or passes the request through per the locale rules.
pub async fn locale_middleware(
    State(router): State<LocaleRouterState>,
    mut request: Request,
    next: Next,
) -> Response {
    let decision = router.route(request.uri().path(), request.uri().query());
    tracing::debug!(path = %request.uri().path(), decision = ?decision, "Locale routing");

    let locale = match decision {
        RouteDecision::Excluded => return next.run(request).await,
        RouteDecision::Redirect { location } => return moved_permanently(&location),
        RouteDecision::PassThrough { locale } => locale,
        RouteDecision::Rewrite { path, locale } => {
            match path.parse::<Uri>() {
                Ok(uri) => *request.uri_mut() = uri,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Rewritten path is not a valid URI");
                    return StatusCode::BAD_REQUEST.into_response();
                }
            }
            locale
        }
    };

    request.extensions_mut().insert(locale);
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .entry(header::CONTENT_LANGUAGE)
        .or_insert(HeaderValue::from_static(locale.code()));
    response
}

fn moved_permanently(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, value)]).into_response(),
        Err(_) => StatusCode::BAD_REQUEST.into_response(),
    }
}

/// Locale of the current request.
///
/// Page requests carry the middleware's decision. API requests bypass locale
/// routing, so the first `Accept-Language` tag is used, then the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

impl<S> axum::extract::FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            if let Some(locale) = parts.extensions.get::<Locale>() {
                return Ok(RequestLocale(*locale));
            }
            let locale = parts
                .headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .and_then(|tag| tag.split(';').next())
                .and_then(Locale::parse)
                .unwrap_or_default();
            Ok(RequestLocale(locale))
        })
    }
}
