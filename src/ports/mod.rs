//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AnalyticsPublisher` - Fire-and-forget analytics events
//! - `ContactMailer` - Delivery of contact requests to the agency inbox
//! - `SelectionHandoff` - Short-lived snapshot transfer between sessions
//! - `SelectionSessions` - Per-visitor selection stores

mod analytics_publisher;
mod contact_mailer;
mod selection_handoff;
mod selection_sessions;

pub use analytics_publisher::AnalyticsPublisher;
pub use contact_mailer::{ContactMailer, ContactMessage, DeliveryReceipt, MailerError};
pub use selection_handoff::SelectionHandoff;
pub use selection_sessions::SelectionSessions;
