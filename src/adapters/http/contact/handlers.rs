//! HTTP handler for the gated contact form.

use axum::extract::State;
use axum::Json;

use super::dto::{ContactRequest, ContactResponse};
use crate::adapters::http::app::AppState;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequestLocale;
use crate::adapters::http::visitor::VisitorSession;
use crate::application::SubmitContactCommand;

/// POST /api/contact - Send the contact request with the current selection
///
/// 422 when nothing is selected, 502 with a fallback address when the mailer
/// fails. The selection survives any failure.
pub async fn submit_contact(
    State(state): State<AppState>,
    VisitorSession(session_id): VisitorSession,
    RequestLocale(locale): RequestLocale,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    let cmd = SubmitContactCommand {
        session_id,
        name: request.name,
        email: request.email,
        phone: request.phone,
        business: request.business,
        message: request.message,
        locale,
    };

    let result = state.submit_contact_handler().handle(cmd).await?;
    Ok(Json(ContactResponse::new(result, locale)))
}
