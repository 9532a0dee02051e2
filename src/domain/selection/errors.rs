//! Selection-specific error types.

use crate::domain::foundation::{
    DomainError, ErrorCode, HandoffToken, ValidationError, VisitorSessionId,
};

/// Selection-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No selection is registered for this visitor session.
    SessionNotFound(VisitorSessionId),
    /// Handoff token unknown, expired or already used.
    HandoffNotFound(HandoffToken),
    /// Malformed item in a request.
    InvalidItem { field: String, message: String },
    /// Infrastructure error (cache, channel).
    Infrastructure(String),
}

impl SelectionError {
    pub fn session_not_found(id: VisitorSessionId) -> Self {
        SelectionError::SessionNotFound(id)
    }
    pub fn handoff_not_found(token: HandoffToken) -> Self {
        SelectionError::HandoffNotFound(token)
    }
    pub fn invalid_item(field: impl Into<String>, message: impl Into<String>) -> Self {
        SelectionError::InvalidItem {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SelectionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SelectionError::SessionNotFound(_) => ErrorCode::VisitorSessionNotFound,
            SelectionError::HandoffNotFound(_) => ErrorCode::HandoffNotFound,
            SelectionError::InvalidItem { .. } => ErrorCode::ValidationFailed,
            SelectionError::Infrastructure(_) => ErrorCode::CacheError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SelectionError::SessionNotFound(id) => format!("Visitor session not found: {}", id),
            SelectionError::HandoffNotFound(_) => {
                "Handoff not found; it may have expired or already been used".to_string()
            }
            SelectionError::InvalidItem { field, message } => {
                format!("Invalid item '{}': {}", field, message)
            }
            SelectionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SelectionError {}

impl From<ValidationError> for SelectionError {
    fn from(err: ValidationError) -> Self {
        SelectionError::InvalidItem {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SelectionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                SelectionError::InvalidItem {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => SelectionError::Infrastructure(err.to_string()),
        }
    }
}
