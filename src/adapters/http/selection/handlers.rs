//! HTTP handlers for visitor sessions and selection endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use super::dto::{
    ClearSelectionResponse, HandoffResponse, SelectItemRequest, SelectItemResponse,
    SelectionResponse, SessionResponse,
};
use crate::adapters::http::app::AppState;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequestLocale;
use crate::adapters::http::visitor::VisitorSession;
use crate::application::{
    AddItemCommand, ClearSelectionCommand, GetSelectionQuery, RemoveItemCommand,
    RestoreHandoffCommand, SelectTierCommand, SelectionView, StashHandoffCommand,
};
use crate::domain::foundation::{HandoffToken, ItemId};
use crate::domain::selection::SelectionError;

// ════════════════════════════════════════════════════════════════════════════
// Sessions
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Issue a visitor session with an empty selection
pub async fn open_session(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let session_id = state.open_session_handler().handle().await?;
    Ok((StatusCode::CREATED, Json(SessionResponse { session_id })))
}

// ════════════════════════════════════════════════════════════════════════════
// Queries
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/selection - Current selection, plan progress and contact gate
pub async fn get_selection(
    State(state): State<AppState>,
    VisitorSession(session_id): VisitorSession,
    RequestLocale(locale): RequestLocale,
) -> Result<Json<SelectionResponse>, ApiError> {
    let view = state
        .get_selection_handler()
        .handle(GetSelectionQuery { session_id, locale })
        .await?;
    Ok(Json(view.into()))
}

// ════════════════════════════════════════════════════════════════════════════
// Commands
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/selection/items - Select an item
pub async fn add_item(
    State(state): State<AppState>,
    VisitorSession(session_id): VisitorSession,
    RequestLocale(locale): RequestLocale,
    Json(request): Json<SelectItemRequest>,
) -> Result<Json<SelectItemResponse>, ApiError> {
    let cmd = AddItemCommand {
        session_id,
        item: request.into_item()?,
        locale,
    };
    let result = state.add_item_handler().handle(cmd).await?;

    let selection = SelectionView::from_set(result.selection, locale).into();
    Ok(Json(SelectItemResponse::new(&result.outcome, selection)))
}

/// POST /api/selection/tier - Select a tier from the pricing grid
pub async fn select_tier(
    State(state): State<AppState>,
    VisitorSession(session_id): VisitorSession,
    RequestLocale(locale): RequestLocale,
    Json(request): Json<SelectItemRequest>,
) -> Result<Json<SelectItemResponse>, ApiError> {
    let cmd = SelectTierCommand {
        session_id,
        item: request.into_item()?,
        locale,
    };
    let result = state.select_tier_handler().handle(cmd).await?;

    let selection = SelectionView::from_set(result.selection, locale).into();
    Ok(Json(SelectItemResponse::new(&result.outcome, selection)))
}

/// DELETE /api/selection/items/:id - Deselect an item
pub async fn remove_item(
    State(state): State<AppState>,
    VisitorSession(session_id): VisitorSession,
    RequestLocale(locale): RequestLocale,
    Path(item_id): Path<String>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let cmd = RemoveItemCommand {
        session_id,
        item_id: ItemId::new(item_id).map_err(SelectionError::from)?,
        locale,
    };
    let selection = state.remove_item_handler().handle(cmd).await?;
    Ok(Json(SelectionView::from_set(selection, locale).into()))
}

/// DELETE /api/selection - Clear the selection
pub async fn clear_selection(
    State(state): State<AppState>,
    VisitorSession(session_id): VisitorSession,
    RequestLocale(locale): RequestLocale,
) -> Result<Json<ClearSelectionResponse>, ApiError> {
    let removed = state
        .clear_selection_handler()
        .handle(ClearSelectionCommand { session_id, locale })
        .await?;
    Ok(Json(ClearSelectionResponse { removed }))
}

// ════════════════════════════════════════════════════════════════════════════
// Handoff
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/selection/handoff - Stash the selection for another session
pub async fn stash_handoff(
    State(state): State<AppState>,
    VisitorSession(session_id): VisitorSession,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .stash_handoff_handler()
        .handle(StashHandoffCommand { session_id })
        .await?;
    Ok((StatusCode::CREATED, Json(HandoffResponse::from(result))))
}

/// POST /api/selection/handoff/:token - Replace this selection with a stashed one
pub async fn restore_handoff(
    State(state): State<AppState>,
    VisitorSession(session_id): VisitorSession,
    RequestLocale(locale): RequestLocale,
    Path(token): Path<String>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let token = token
        .parse::<HandoffToken>()
        .map_err(|_| SelectionError::invalid_item("token", "not a valid handoff token"))?;

    let selection = state
        .restore_handoff_handler()
        .handle(RestoreHandoffCommand {
            session_id,
            token,
            locale,
        })
        .await?;
    Ok(Json(SelectionView::from_set(selection, locale).into()))
}
