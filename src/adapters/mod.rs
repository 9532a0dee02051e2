//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `analytics` - Analytics sinks (tracing, in-memory)
//! - `email` - Contact mailers (Resend, mock)
//! - `handoff` - Selection handoff stores (in-memory, Redis)
//! - `sessions` - Visitor session registry
//! - `http` - axum routes and middleware

pub mod analytics;
pub mod email;
pub mod handoff;
pub mod http;
pub mod sessions;

pub use analytics::{InMemoryAnalytics, TracingAnalyticsPublisher};
pub use email::{MockMailer, ResendConfig, ResendMailer};
pub use handoff::{InMemorySelectionHandoff, RedisSelectionHandoff};
pub use sessions::InMemorySelectionSessions;
