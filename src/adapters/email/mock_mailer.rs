//! Mock mailer for tests and local development.
//!
//! Records every message. Can be switched to fail so the contact flow's
//! error path can be exercised end to end.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::ports::{ContactMailer, ContactMessage, DeliveryReceipt, MailerError};

#[derive(Debug, Default)]
pub struct MockMailer {
    sent: Mutex<Vec<ContactMessage>>,
    attempts: Mutex<usize>,
    failing: AtomicBool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails.
    pub fn failing() -> Self {
        let mailer = Self::default();
        mailer.set_failing(true);
        mailer
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Messages that were delivered.
    pub fn sent(&self) -> Vec<ContactMessage> {
        self.sent.lock().expect("MockMailer: sent lock poisoned").clone()
    }

    /// Every call to `send`, successful or not.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().expect("MockMailer: attempts lock poisoned")
    }
}

#[async_trait]
impl ContactMailer for MockMailer {
    async fn send(&self, message: ContactMessage) -> Result<DeliveryReceipt, MailerError> {
        *self.attempts.lock().expect("MockMailer: attempts lock poisoned") += 1;

        if self.failing.load(Ordering::SeqCst) {
            return Err(MailerError::Network("simulated outage".to_string()));
        }

        let mut sent = self.sent.lock().expect("MockMailer: sent lock poisoned");
        sent.push(message);
        tracing::info!(count = sent.len(), "MockMailer recorded contact request");
        Ok(DeliveryReceipt {
            message_id: Some(format!("mock-{}", sent.len())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ContactSubmission;
    use crate::domain::locale::Locale;

    fn message() -> ContactMessage {
        let submission = ContactSubmission::new("Sam", "sam@example.com", Locale::En).unwrap();
        ContactMessage::new(&submission, "SEO Audit")
    }

    #[tokio::test]
    async fn records_sent_messages() {
        let mailer = MockMailer::new();
        let receipt = mailer.send(message()).await.unwrap();
        assert_eq!(receipt.message_id.as_deref(), Some("mock-1"));
        assert_eq!(mailer.sent().len(), 1);
    }

    #[tokio::test]
    async fn failing_mailer_counts_attempts_but_sends_nothing() {
        let mailer = MockMailer::failing();
        assert!(mailer.send(message()).await.is_err());
        assert_eq!(mailer.attempts(), 1);
        assert!(mailer.sent().is_empty());
    }
}
