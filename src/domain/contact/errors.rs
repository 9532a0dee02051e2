//! Contact-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError, VisitorSessionId};

/// Contact submission errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// No selection is registered for this visitor session.
    SessionNotFound(VisitorSessionId),
    /// Nothing selected; the form is gated.
    SelectionRequired,
    /// A form field failed validation.
    Validation(ValidationError),
    /// The mailer did not confirm delivery. The selection is kept.
    DeliveryFailed {
        reason: String,
        fallback_contact: String,
    },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ContactError {
    pub fn session_not_found(id: VisitorSessionId) -> Self {
        ContactError::SessionNotFound(id)
    }
    pub fn selection_required() -> Self {
        ContactError::SelectionRequired
    }
    pub fn delivery_failed(reason: impl Into<String>, fallback_contact: impl Into<String>) -> Self {
        ContactError::DeliveryFailed {
            reason: reason.into(),
            fallback_contact: fallback_contact.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ContactError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ContactError::SessionNotFound(_) => ErrorCode::VisitorSessionNotFound,
            ContactError::SelectionRequired => ErrorCode::SelectionRequired,
            ContactError::Validation(ValidationError::EmptyField { .. }) => ErrorCode::EmptyField,
            ContactError::Validation(ValidationError::InvalidFormat { .. }) => ErrorCode::InvalidFormat,
            ContactError::Validation(_) => ErrorCode::ValidationFailed,
            ContactError::DeliveryFailed { .. } => ErrorCode::DeliveryFailed,
            ContactError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ContactError::SessionNotFound(id) => format!("Visitor session not found: {}", id),
            ContactError::SelectionRequired => {
                "Select at least one service before sending a request".to_string()
            }
            ContactError::Validation(err) => err.to_string(),
            ContactError::DeliveryFailed { fallback_contact, .. } => format!(
                "We couldn't send your request. Please try again or email us directly at {}",
                fallback_contact
            ),
            ContactError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ContactError {}

impl From<ValidationError> for ContactError {
    fn from(err: ValidationError) -> Self {
        ContactError::Validation(err)
    }
}

impl From<DomainError> for ContactError {
    fn from(err: DomainError) -> Self {
        ContactError::Infrastructure(err.to_string())
    }
}
