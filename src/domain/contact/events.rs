//! Contact domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, Timestamp, VisitorSessionId};
use crate::domain::locale::Locale;

/// Published when the mailer confirmed delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmitted {
    pub session_id: VisitorSessionId,
    pub item_count: usize,
    pub locale: Locale,
    pub submitted_at: Timestamp,
}

domain_event!(
    ContactSubmitted,
    event_type = "contact.submitted.v1",
    aggregate_id = session_id,
    aggregate_type = "Contact",
    occurred_at = submitted_at
);

/// Published when the mailer failed; the selection was kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactFailed {
    pub session_id: VisitorSessionId,
    pub reason: String,
    pub failed_at: Timestamp,
}

domain_event!(
    ContactFailed,
    event_type = "contact.failed.v1",
    aggregate_id = session_id,
    aggregate_type = "Contact",
    occurred_at = failed_at
);

/// Published when a submission was refused because nothing was selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactBlocked {
    pub session_id: VisitorSessionId,
    pub blocked_at: Timestamp,
}

domain_event!(
    ContactBlocked,
    event_type = "contact.blocked.v1",
    aggregate_id = session_id,
    aggregate_type = "Contact",
    occurred_at = blocked_at
);
