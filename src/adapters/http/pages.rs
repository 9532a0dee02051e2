//! Page shell endpoints.
//!
//! Pages are rendered by the frontend; the backend answers every routed page
//! with the resolved locale, the canonical public path and the alternate
//! URLs for the language switcher.

use axum::extract::State;
use axum::http::{header, Uri};
use axum::response::IntoResponse;
use axum::{routing::get, Extension, Json, Router};
use serde::Serialize;

use crate::adapters::http::app::AppState;
use crate::domain::locale::{Locale, SupportedLocales};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub locale: Locale,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageShellResponse {
    pub locale: Locale,
    pub path: String,
    pub alternate: Vec<AlternateLink>,
}

/// GET /{locale} and /{locale}/*path - reached after locale routing
pub async fn page_shell(
    State(state): State<AppState>,
    locale: Option<Extension<Locale>>,
    uri: Uri,
) -> impl IntoResponse {
    let locales = &state.settings.locales;
    let locale = locale
        .map(|Extension(locale)| locale)
        .unwrap_or_else(|| Locale::from_path(uri.path()));
    let (_, page) = locales.strip_locale(uri.path());

    let alternate = locales
        .all()
        .iter()
        .map(|l| AlternateLink {
            locale: *l,
            href: locales.localized_path(*l, page),
        })
        .collect();

    let body = PageShellResponse {
        locale,
        path: locales.localized_path(locale, page),
        alternate,
    };
    ([(header::CONTENT_LANGUAGE, locale.code())], Json(body))
}

/// One root and one catch-all route per supported locale.
pub fn page_routes(locales: &SupportedLocales) -> Router<AppState> {
    locales.all().iter().fold(Router::new(), |router, locale| {
        let prefix = locale.prefix();
        router
            .route(&prefix, get(page_shell))
            .route(&format!("{}/*path", prefix), get(page_shell))
    })
}
