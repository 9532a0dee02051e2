//! Contact mailer port - Interface for delivering contact requests.
//!
//! The site never stores contact requests; a request is only considered
//! received once the mailer confirms delivery.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::contact::ContactSubmission;
use crate::domain::locale::Locale;

/// Everything the agency needs to follow up on a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub locale: Locale,

    /// Selected items, one per line.
    pub selection_summary: String,
}

impl ContactMessage {
    pub fn new(submission: &ContactSubmission, selection_summary: impl Into<String>) -> Self {
        Self {
            name: submission.name().to_string(),
            email: submission.email().to_string(),
            phone: submission.phone().map(str::to_string),
            business: submission.business().map(str::to_string),
            message: submission.message().map(str::to_string),
            locale: submission.locale(),
            selection_summary: selection_summary.into(),
        }
    }

    /// Email subject line for the agency inbox.
    pub fn subject(&self) -> String {
        match &self.business {
            Some(business) => format!("New inquiry from {} ({})", self.name, business),
            None => format!("New inquiry from {}", self.name),
        }
    }

    /// Plain-text email body.
    pub fn text_body(&self) -> String {
        let mut body = format!("Name: {}\nEmail: {}\n", self.name, self.email);
        if let Some(phone) = &self.phone {
            body.push_str(&format!("Phone: {}\n", phone));
        }
        if let Some(business) = &self.business {
            body.push_str(&format!("Business: {}\n", business));
        }
        body.push_str(&format!("Language: {}\n", self.locale.display_name()));
        body.push_str("\nSelected services:\n");
        body.push_str(&self.selection_summary);
        if let Some(message) = &self.message {
            body.push_str("\n\nMessage:\n");
            body.push_str(message);
        }
        body
    }
}

/// Confirmation returned by the mail provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Provider-assigned message id, when the provider returns one.
    pub message_id: Option<String>,
}

/// Errors from a mailer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MailerError {
    #[error("Mail provider rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Mail provider unreachable: {0}")]
    Network(String),

    #[error("Mailer misconfigured: {0}")]
    Configuration(String),
}

/// Port for sending a contact request to the agency.
///
/// Implementations must not retry internally; one call is one attempt.
#[async_trait]
pub trait ContactMailer: Send + Sync {
    async fn send(&self, message: ContactMessage) -> Result<DeliveryReceipt, MailerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        let submission = ContactSubmission::new("Mina", "mina@example.kr", Locale::Ko)
            .unwrap()
            .with_business(Some("Mina Bakery".to_string()))
            .unwrap()
            .with_message(Some("Opening a second store in May.".to_string()))
            .unwrap();
        ContactMessage::new(&submission, "Plus Website | ₩1,900,000\nSEO Audit")
    }

    #[test]
    fn subject_includes_business_when_present() {
        assert_eq!(message().subject(), "New inquiry from Mina (Mina Bakery)");
    }

    #[test]
    fn text_body_lists_selection_and_message() {
        let body = message().text_body();
        assert!(body.contains("Email: mina@example.kr"));
        assert!(body.contains("Language: 한국어"));
        assert!(body.contains("Selected services:\nPlus Website | ₩1,900,000\nSEO Audit"));
        assert!(body.ends_with("Opening a second store in May."));
        assert!(!body.contains("Phone:"));
    }
}
