//! Resend mailer - delivers contact requests through the Resend HTTP API.
//!
//! One `POST /emails` per request, authenticated with the API key as a bearer
//! token. The visitor's address is set as `reply_to` so the agency can answer
//! directly from its inbox.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::EmailConfig;
use crate::ports::{ContactMailer, ContactMessage, DeliveryReceipt, MailerError};

const DEFAULT_API_BASE_URL: &str = "https://api.resend.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Resend API configuration.
#[derive(Clone)]
pub struct ResendConfig {
    api_key: SecretString,
    from: String,
    to: String,
    api_base_url: String,
}

impl ResendConfig {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            from: from.into(),
            to: to.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Builds the mailer settings from the `email` config section.
    pub fn from_email_config(config: &EmailConfig) -> Self {
        Self::new(
            config.resend_api_key.expose_secret().clone(),
            config.from_header(),
            config.to_email.clone(),
        )
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

impl std::fmt::Debug for ResendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendConfig")
            .field("api_key", &"[REDACTED]")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    reply_to: &'a str,
    subject: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

pub struct ResendMailer {
    config: ResendConfig,
    http_client: reqwest::Client,
}

impl ResendMailer {
    pub fn new(config: ResendConfig) -> Result<Self, MailerError> {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| MailerError::Configuration(e.to_string()))?;
        Ok(Self { config, http_client })
    }

    fn request<'a>(&'a self, message: &'a ContactMessage) -> SendEmailRequest<'a> {
        SendEmailRequest {
            from: &self.config.from,
            to: vec![self.config.to.as_str()],
            reply_to: &message.email,
            subject: message.subject(),
            text: message.text_body(),
        }
    }
}

#[async_trait]
impl ContactMailer for ResendMailer {
    async fn send(&self, message: ContactMessage) -> Result<DeliveryReceipt, MailerError> {
        let url = format!("{}/emails", self.config.api_base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&self.request(&message))
            .send()
            .await
            .map_err(|e| MailerError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, error = %error_text, "Resend send failed");
            return Err(MailerError::Rejected {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: SendEmailResponse = response.json().await.map_err(|e| MailerError::Rejected {
            status: status.as_u16(),
            message: format!("Failed to parse Resend response: {}", e),
        })?;

        tracing::info!(message_id = body.id.as_deref().unwrap_or("-"), "Contact request delivered");

        Ok(DeliveryReceipt { message_id: body.id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ContactSubmission;
    use crate::domain::locale::Locale;

    fn mailer() -> ResendMailer {
        ResendMailer::new(ResendConfig::new(
            "re_test",
            "Agency <hello@agency.kr>",
            "inbox@agency.kr",
        ))
        .unwrap()
    }

    #[test]
    fn request_replies_to_the_visitor() {
        let submission = ContactSubmission::new("Sam", "sam@example.com", Locale::En).unwrap();
        let message = ContactMessage::new(&submission, "Plus Website");
        let mailer = mailer();

        let request = serde_json::to_value(mailer.request(&message)).unwrap();

        assert_eq!(request["from"], "Agency <hello@agency.kr>");
        assert_eq!(request["to"][0], "inbox@agency.kr");
        assert_eq!(request["reply_to"], "sam@example.com");
        assert_eq!(request["subject"], "New inquiry from Sam");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ResendConfig::new("re_secret", "a@b.c", "d@e.f");
        assert!(!format!("{:?}", config).contains("re_secret"));
    }

    #[tokio::test]
    async fn unreachable_api_is_a_network_error() {
        let mailer = ResendMailer::new(
            ResendConfig::new("re_test", "a@b.c", "d@e.f").with_base_url("http://127.0.0.1:9"),
        )
        .unwrap();
        let submission = ContactSubmission::new("Sam", "sam@example.com", Locale::En).unwrap();

        let result = mailer.send(ContactMessage::new(&submission, "x")).await;

        assert!(matches!(result, Err(MailerError::Network(_))));
    }
}
