//! HTTP routes for the contact endpoint.

use axum::{routing::post, Router};

use super::handlers::submit_contact;
use crate::adapters::http::app::AppState;

pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/api/contact", post(submit_contact))
}
