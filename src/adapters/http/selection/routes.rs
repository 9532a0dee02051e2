//! HTTP routes for selection endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    add_item, clear_selection, get_selection, open_session, remove_item, restore_handoff,
    select_tier, stash_handoff,
};
use crate::adapters::http::app::AppState;

/// Creates the visitor session and selection routes.
pub fn selection_routes() -> Router<AppState> {
    Router::new()
        .route("/api/sessions", post(open_session))
        .route("/api/selection", get(get_selection).delete(clear_selection))
        .route("/api/selection/items", post(add_item))
        .route("/api/selection/items/:id", delete(remove_item))
        .route("/api/selection/tier", post(select_tier))
        .route("/api/selection/handoff", post(stash_handoff))
        .route("/api/selection/handoff/:token", post(restore_handoff))
}
