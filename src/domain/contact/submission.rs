//! Visitor-entered contact form fields.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::locale::Locale;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_PHONE_LEN: usize = 40;
pub const MAX_BUSINESS_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 5000;

/// A validated contact request.
///
/// Name and email are required; the rest is optional and blank values are
/// normalized to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    phone: Option<String>,
    business: Option<String>,
    message: Option<String>,
    locale: Locale,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        locale: Locale,
    ) -> Result<Self, ValidationError> {
        let name = required("name", name.into(), MAX_NAME_LEN)?;
        let email = required("email", email.into(), MAX_EMAIL_LEN)?;
        validate_email(&email)?;

        Ok(Self {
            name,
            email,
            phone: None,
            business: None,
            message: None,
            locale,
        })
    }

    pub fn with_phone(mut self, phone: Option<String>) -> Result<Self, ValidationError> {
        self.phone = optional("phone", phone, MAX_PHONE_LEN)?;
        Ok(self)
    }

    pub fn with_business(mut self, business: Option<String>) -> Result<Self, ValidationError> {
        self.business = optional("business", business, MAX_BUSINESS_LEN)?;
        Ok(self)
    }

    pub fn with_message(mut self, message: Option<String>) -> Result<Self, ValidationError> {
        self.message = optional("message", message, MAX_MESSAGE_LEN)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn business(&self) -> Option<&str> {
        self.business.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

fn required(field: &str, value: String, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    check_len(field, trimmed, max)?;
    Ok(trimmed.to_string())
}

fn optional(field: &str, value: Option<String>, max: usize) -> Result<Option<String>, ValidationError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(trimmed) => {
            check_len(field, trimmed, max)?;
            Ok(Some(trimmed.to_string()))
        }
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::too_long(field, max, actual));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(ValidationError::invalid_format("email", "expected an address like name@example.com")),
    }
}
