//! Error responses shared by every HTTP endpoint.
//!
//! Domain errors are wrapped in [`ApiError`] and mapped to a status code plus
//! an [`ErrorResponse`] body carrying the stable error code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::domain::contact::ContactError;
use crate::domain::foundation::ErrorCode;
use crate::domain::selection::SelectionError;

static VERBOSE_ERRORS: OnceCell<bool> = OnceCell::new();

/// Exposes infrastructure error details in responses. Set once at startup.
pub fn set_verbose_errors(verbose: bool) {
    let _ = VERBOSE_ERRORS.set(verbose);
}

fn verbose_errors() -> bool {
    VERBOSE_ERRORS.get().copied().unwrap_or(false)
}

/// Standard error body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error_code: impl ToString,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.to_string(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Error returned by HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    Selection(SelectionError),
    Contact(ContactError),
}

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        ApiError::Selection(err)
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        ApiError::Contact(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Selection(err) => match err {
                SelectionError::SessionNotFound(_) | SelectionError::HandoffNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                SelectionError::InvalidItem { .. } => StatusCode::BAD_REQUEST,
                SelectionError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Contact(err) => match err {
                ContactError::SessionNotFound(_) => StatusCode::NOT_FOUND,
                ContactError::SelectionRequired => StatusCode::UNPROCESSABLE_ENTITY,
                ContactError::Validation(_) => StatusCode::BAD_REQUEST,
                ContactError::DeliveryFailed { .. } => StatusCode::BAD_GATEWAY,
                ContactError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Selection(SelectionError::Infrastructure(msg))
            | ApiError::Contact(ContactError::Infrastructure(msg)) => {
                tracing::error!(error = %msg, "Request failed on infrastructure error");
                let message = if verbose_errors() {
                    msg.clone()
                } else {
                    "An internal error occurred".to_string()
                };
                ErrorResponse::new(ErrorCode::InternalError, message)
            }
            ApiError::Selection(err) => ErrorResponse::new(err.code(), err.message()),
            ApiError::Contact(
                err @ ContactError::DeliveryFailed {
                    fallback_contact, ..
                },
            ) => ErrorResponse::with_details(
                err.code(),
                err.message(),
                serde_json::json!({ "fallback_contact": fallback_contact }),
            ),
            ApiError::Contact(err) => ErrorResponse::new(err.code(), err.message()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
