//! Application state and router assembly.

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, middleware, routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::contact::contact_routes;
use super::middleware::locale_middleware;
use super::pages::page_routes;
use super::selection::selection_routes;
use crate::application::{
    AddItemHandler, AnalyticsEmitter, ClearSelectionHandler, GetSelectionHandler,
    OpenSessionHandler, RemoveItemHandler, RestoreHandoffHandler, SelectTierHandler,
    StashHandoffHandler, SubmitContactHandler,
};
use crate::domain::locale::{LocaleRouter, PathExclusions, SupportedLocales};
use crate::domain::selection::TierSelectionPolicy;
use crate::ports::{ContactMailer, SelectionHandoff, SelectionSessions};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Settings the HTTP handlers read from configuration.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub locales: SupportedLocales,
    pub tier_policy: TierSelectionPolicy,
    pub handoff_ttl: Duration,
    pub fallback_contact: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            locales: SupportedLocales::default(),
            tier_policy: TierSelectionPolicy::default(),
            handoff_ttl: Duration::from_secs(300),
            fallback_contact: "hello@agency.kr".to_string(),
        }
    }
}

/// Shared state: ports plus settings. Handlers are built per request.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SelectionSessions>,
    pub handoff: Arc<dyn SelectionHandoff>,
    pub mailer: Arc<dyn ContactMailer>,
    pub analytics: AnalyticsEmitter,
    pub settings: Arc<SiteSettings>,
}

impl AppState {
    pub fn new(
        sessions: Arc<dyn SelectionSessions>,
        handoff: Arc<dyn SelectionHandoff>,
        mailer: Arc<dyn ContactMailer>,
        analytics: AnalyticsEmitter,
        settings: SiteSettings,
    ) -> Self {
        Self {
            sessions,
            handoff,
            mailer,
            analytics,
            settings: Arc::new(settings),
        }
    }

    pub fn open_session_handler(&self) -> OpenSessionHandler {
        OpenSessionHandler::new(self.sessions.clone())
    }

    pub fn get_selection_handler(&self) -> GetSelectionHandler {
        GetSelectionHandler::new(self.sessions.clone())
    }

    pub fn add_item_handler(&self) -> AddItemHandler {
        AddItemHandler::new(self.sessions.clone(), self.analytics.clone())
    }

    pub fn select_tier_handler(&self) -> SelectTierHandler {
        SelectTierHandler::new(
            self.sessions.clone(),
            self.analytics.clone(),
            self.settings.tier_policy,
        )
    }

    pub fn remove_item_handler(&self) -> RemoveItemHandler {
        RemoveItemHandler::new(self.sessions.clone(), self.analytics.clone())
    }

    pub fn clear_selection_handler(&self) -> ClearSelectionHandler {
        ClearSelectionHandler::new(self.sessions.clone(), self.analytics.clone())
    }

    pub fn stash_handoff_handler(&self) -> StashHandoffHandler {
        StashHandoffHandler::new(
            self.sessions.clone(),
            self.handoff.clone(),
            self.settings.handoff_ttl,
        )
    }

    pub fn restore_handoff_handler(&self) -> RestoreHandoffHandler {
        RestoreHandoffHandler::new(
            self.sessions.clone(),
            self.handoff.clone(),
            self.analytics.clone(),
        )
    }

    pub fn submit_contact_handler(&self) -> SubmitContactHandler {
        SubmitContactHandler::new(
            self.sessions.clone(),
            self.mailer.clone(),
            self.analytics.clone(),
            self.settings.fallback_contact.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Router
// ════════════════════════════════════════════════════════════════════════════

/// Cross-cutting HTTP options.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub request_timeout: Duration,
    pub cors_origins: Vec<String>,
    pub enable_tracing: bool,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
            enable_tracing: true,
        }
    }
}

/// GET /health - liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Routes served behind locale routing: pages, the JSON API and health.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(page_routes(&state.settings.locales))
        .merge(selection_routes())
        .merge(contact_routes())
        .with_state(state)
}

/// Builds the complete application.
///
/// The locale middleware wraps the fallback so it sees (and may rewrite)
/// the URI before any route is matched.
pub fn build_app(state: AppState, options: &HttpOptions) -> Router {
    let exclusions = PathExclusions::standard().clone().with_file("health");
    let locale_router = Arc::new(LocaleRouter::new(state.settings.locales.clone(), exclusions));

    let app = Router::new()
        .fallback_service(routes(state))
        .layer(middleware::from_fn_with_state(locale_router, locale_middleware))
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(cors_layer(&options.cors_origins));

    if options.enable_tracing {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
