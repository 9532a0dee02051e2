//! Agency site server.
//!
//! Loads `AGENCY_SITE__*` configuration, wires adapters to the configured
//! backends and serves the locale-routed application.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use agency_site::adapters::http::{build_app, set_verbose_errors, AppState, HttpOptions, SiteSettings};
use agency_site::adapters::{
    InMemorySelectionHandoff, InMemorySelectionSessions, MockMailer, RedisSelectionHandoff,
    ResendConfig, ResendMailer, TracingAnalyticsPublisher,
};
use agency_site::application::AnalyticsEmitter;
use agency_site::config::{AppConfig, HandoffBackend};
use agency_site::ports::{ContactMailer, SelectionHandoff, SelectionSessions};

const PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }
    set_verbose_errors(config.features.verbose_errors);

    let sessions = Arc::new(InMemorySelectionSessions::new(config.selection.session_idle()));
    spawn_idle_purge(sessions.clone(), config.selection.session_idle());

    let state = AppState::new(
        sessions,
        handoff_store(&config).await?,
        contact_mailer(&config)?,
        analytics(&config),
        SiteSettings {
            locales: config.locale.supported_locales()?,
            tier_policy: config.selection.tier_policy,
            handoff_ttl: config.selection.handoff_ttl(),
            fallback_contact: config.email.fallback_contact.clone(),
        },
    );

    let options = HttpOptions {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
        enable_tracing: config.features.enable_tracing,
    };
    let app = build_app(state, &options);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        tier_policy = ?config.selection.tier_policy,
        "Agency site listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

async fn handoff_store(
    config: &AppConfig,
) -> Result<Arc<dyn SelectionHandoff>, Box<dyn std::error::Error>> {
    match config.selection.handoff_backend {
        HandoffBackend::Memory => Ok(Arc::new(InMemorySelectionHandoff::new())),
        HandoffBackend::Redis => {
            let url = config
                .redis
                .url
                .as_deref()
                .ok_or("redis.url is required for the redis handoff backend")?;
            let client = redis::Client::open(url)?;
            let conn = tokio::time::timeout(
                config.redis.timeout(),
                client.get_multiplexed_tokio_connection(),
            )
            .await??;
            tracing::info!("Handoff snapshots stored in Redis");
            Ok(Arc::new(RedisSelectionHandoff::new(conn)))
        }
    }
}

fn contact_mailer(config: &AppConfig) -> Result<Arc<dyn ContactMailer>, Box<dyn std::error::Error>> {
    if config.email.has_api_key() {
        let mailer = ResendMailer::new(ResendConfig::from_email_config(&config.email))?;
        return Ok(Arc::new(mailer));
    }
    tracing::warn!("No Resend API key configured; contact requests are recorded, not sent");
    Ok(Arc::new(MockMailer::new()))
}

fn analytics(config: &AppConfig) -> AnalyticsEmitter {
    if config.features.analytics_enabled {
        AnalyticsEmitter::new(Arc::new(TracingAnalyticsPublisher::new()))
    } else {
        AnalyticsEmitter::disabled()
    }
}

fn spawn_idle_purge(sessions: Arc<InMemorySelectionSessions>, idle: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            match sessions.purge_idle(idle).await {
                Ok(0) => {}
                Ok(purged) => tracing::debug!(purged, "Idle visitor sessions dropped"),
                Err(e) => tracing::warn!(error = %e, "Session purge failed"),
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
