//! Email configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key. Empty means no real delivery.
    #[serde(default = "default_api_key")]
    pub resend_api_key: SecretString,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Agency inbox that receives contact requests
    #[serde(default = "default_to_email")]
    pub to_email: String,

    /// Address shown to visitors when delivery fails
    #[serde(default = "default_fallback_contact")]
    pub fallback_contact: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// True when a Resend key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.resend_api_key.expose_secret().is_empty()
    }

    /// Validate email configuration
    ///
    /// The API key may be left empty outside production; the binary then
    /// falls back to a recording mailer.
    pub fn validate(&self, require_api_key: bool) -> Result<(), ValidationError> {
        let key = self.resend_api_key.expose_secret();
        if key.is_empty() {
            if require_api_key {
                return Err(ValidationError::MissingRequired("RESEND_API_KEY"));
            }
        } else if !key.starts_with("re_") {
            return Err(ValidationError::InvalidResendKey);
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !self.to_email.contains('@') {
            return Err(ValidationError::InvalidToEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: default_api_key(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            to_email: default_to_email(),
            fallback_contact: default_fallback_contact(),
        }
    }
}

fn default_api_key() -> SecretString {
    SecretString::new(String::new())
}

fn default_from_email() -> String {
    "noreply@agency.kr".to_string()
}

fn default_from_name() -> String {
    "Agency Website".to_string()
}

fn default_to_email() -> String {
    "hello@agency.kr".to_string()
}

fn default_fallback_contact() -> String {
    "hello@agency.kr".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(key: &str) -> EmailConfig {
        EmailConfig {
            resend_api_key: SecretString::new(key.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_email_config_defaults() {
        let config = EmailConfig::default();
        assert_eq!(config.from_email, "noreply@agency.kr");
        assert_eq!(config.to_email, "hello@agency.kr");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_from_header() {
        let config = EmailConfig {
            from_email: "studio@example.com".to_string(),
            from_name: "Studio".to_string(),
            ..Default::default()
        };
        assert_eq!(config.from_header(), "Studio <studio@example.com>");
    }

    #[test]
    fn test_missing_api_key_only_fails_when_required() {
        let config = EmailConfig::default();
        assert!(config.validate(false).is_ok());
        assert_eq!(
            config.validate(true),
            Err(ValidationError::MissingRequired("RESEND_API_KEY"))
        );
    }

    #[test]
    fn test_validation_invalid_api_key_prefix() {
        assert_eq!(with_key("sk_xxx").validate(false), Err(ValidationError::InvalidResendKey));
    }

    #[test]
    fn test_validation_invalid_addresses() {
        let config = EmailConfig {
            from_email: "invalid-email".to_string(),
            ..with_key("re_xxx")
        };
        assert_eq!(config.validate(true), Err(ValidationError::InvalidFromEmail));

        let config = EmailConfig {
            to_email: "inbox".to_string(),
            ..with_key("re_xxx")
        };
        assert_eq!(config.validate(true), Err(ValidationError::InvalidToEmail));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(with_key("re_abcd1234").validate(true).is_ok());
    }
}
