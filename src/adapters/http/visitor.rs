//! Visitor session extractor.
//!
//! Every selection and contact endpoint is scoped to a visitor session,
//! carried in the `X-Visitor-Session` header as a UUID issued by
//! `POST /api/sessions`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::error::ErrorResponse;
use crate::domain::foundation::{ErrorCode, VisitorSessionId};

/// Header naming the visitor session.
pub const VISITOR_SESSION_HEADER: &str = "x-visitor-session";

/// The caller's visitor session id.
#[derive(Debug, Clone, Copy)]
pub struct VisitorSession(pub VisitorSessionId);

/// Rejection when the header is missing or not a UUID.
#[derive(Debug, Clone, Copy)]
pub struct VisitorSessionRequired;

impl IntoResponse for VisitorSessionRequired {
    fn into_response(self) -> Response {
        let error = ErrorResponse::new(
            ErrorCode::VisitorSessionRequired,
            "A valid X-Visitor-Session header is required",
        );
        (StatusCode::BAD_REQUEST, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for VisitorSession
where
    S: Send + Sync,
{
    type Rejection = VisitorSessionRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .headers
                .get(VISITOR_SESSION_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<VisitorSessionId>().ok())
                .map(VisitorSession)
                .ok_or(VisitorSessionRequired)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<VisitorSession, VisitorSessionRequired> {
        let mut builder = Request::builder().uri("/api/selection");
        if let Some(value) = header {
            builder = builder.header(VISITOR_SESSION_HEADER, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        VisitorSession::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn valid_uuid_header_is_accepted() {
        let id = VisitorSessionId::new();
        let session = extract(Some(&id.to_string())).await.unwrap();
        assert_eq!(session.0, id);
    }

    #[tokio::test]
    async fn missing_or_malformed_header_is_rejected() {
        assert!(extract(None).await.is_err());
        assert!(extract(Some("not-a-uuid")).await.is_err());
    }

    #[tokio::test]
    async fn rejection_is_bad_request() {
        let response = VisitorSessionRequired.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
