//! SubmitContactHandler - sends the gated contact request.
//!
//! 1. Refuse when nothing is selected.
//! 2. Validate the form fields.
//! 3. Hand the request and the selection summary to the mailer, once.
//! 4. Remove the sent items only after the mailer confirmed delivery.

use std::sync::Arc;

use crate::application::AnalyticsEmitter;
use crate::domain::contact::{
    summarize, ContactBlocked, ContactError, ContactFailed, ContactSubmission, ContactSubmitted,
};
use crate::domain::foundation::{SerializableDomainEvent, Timestamp, VisitorSessionId};
use crate::domain::locale::Locale;
use crate::domain::selection::SelectionCleared;
use crate::ports::{ContactMailer, ContactMessage, DeliveryReceipt, SelectionSessions};

/// Raw form fields as entered by the visitor.
#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    pub session_id: VisitorSessionId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub business: Option<String>,
    pub message: Option<String>,
    pub locale: Locale,
}

#[derive(Debug, Clone)]
pub struct SubmitContactResult {
    pub receipt: DeliveryReceipt,
    pub item_count: usize,
}

pub struct SubmitContactHandler {
    sessions: Arc<dyn SelectionSessions>,
    mailer: Arc<dyn ContactMailer>,
    analytics: AnalyticsEmitter,
    fallback_contact: String,
}

impl SubmitContactHandler {
    pub fn new(
        sessions: Arc<dyn SelectionSessions>,
        mailer: Arc<dyn ContactMailer>,
        analytics: AnalyticsEmitter,
        fallback_contact: impl Into<String>,
    ) -> Self {
        Self {
            sessions,
            mailer,
            analytics,
            fallback_contact: fallback_contact.into(),
        }
    }

    pub async fn handle(&self, cmd: SubmitContactCommand) -> Result<SubmitContactResult, ContactError> {
        let store = self
            .sessions
            .find(&cmd.session_id)
            .await?
            .ok_or_else(|| ContactError::session_not_found(cmd.session_id))?;
        let locale = cmd.locale.code();

        let snapshot = store.snapshot();
        if snapshot.is_empty() {
            tracing::info!(session_id = %cmd.session_id, "Contact submission blocked: nothing selected");
            let event = ContactBlocked {
                session_id: cmd.session_id,
                blocked_at: Timestamp::now(),
            };
            self.analytics.emit(event.to_envelope().with_locale(locale));
            return Err(ContactError::selection_required());
        }

        let submission = ContactSubmission::new(cmd.name, cmd.email, cmd.locale)?
            .with_phone(cmd.phone)?
            .with_business(cmd.business)?
            .with_message(cmd.message)?;

        let message = ContactMessage::new(&submission, summarize(&snapshot));

        match self.mailer.send(message).await {
            Ok(receipt) => {
                let removed = store.remove_sent(&snapshot);
                tracing::info!(
                    session_id = %cmd.session_id,
                    items = snapshot.len(),
                    message_id = ?receipt.message_id,
                    "Contact request sent"
                );

                let now = Timestamp::now();
                let submitted = ContactSubmitted {
                    session_id: cmd.session_id,
                    item_count: snapshot.len(),
                    locale: cmd.locale,
                    submitted_at: now,
                };
                self.analytics.emit(submitted.to_envelope().with_locale(locale));
                let cleared = SelectionCleared {
                    session_id: cmd.session_id,
                    removed_count: removed,
                    cleared_at: now,
                };
                self.analytics.emit(cleared.to_envelope().with_locale(locale));

                Ok(SubmitContactResult {
                    receipt,
                    item_count: snapshot.len(),
                })
            }
            Err(e) => {
                tracing::warn!(
                    session_id = %cmd.session_id,
                    error = %e,
                    "Contact delivery failed; selection kept"
                );
                let event = ContactFailed {
                    session_id: cmd.session_id,
                    reason: e.to_string(),
                    failed_at: Timestamp::now(),
                };
                self.analytics.emit(event.to_envelope().with_locale(locale));
                Err(ContactError::delivery_failed(e.to_string(), &self.fallback_contact))
            }
        }
    }
}
