//! HTTP DTOs for selection endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{SelectionView, StashHandoffResult};
use crate::domain::foundation::{ItemId, VisitorSessionId};
use crate::domain::selection::{
    AddOutcome, ContactGate, ItemCategory, NextStep, PlanProgress, SelectableItem, SelectionError,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// An item picked on a page.
///
/// `category` may be omitted by older clients; it is then inferred from the
/// `tier-` / `subscription-` id prefix.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectItemRequest {
    pub id: String,
    #[serde(default)]
    pub category: Option<ItemCategory>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

impl SelectItemRequest {
    /// Validates the request into a domain item.
    pub fn into_item(self) -> Result<SelectableItem, SelectionError> {
        let id = ItemId::new(self.id)?;
        let category = self
            .category
            .unwrap_or_else(|| ItemCategory::infer_from_id(&id));

        let mut item = SelectableItem::new(id, category, self.title)?;
        if let Some(description) = self.description {
            item = item.with_description(description)?;
        }
        if let Some(price) = self.price {
            item = item.with_price(price)?;
        }
        Ok(item)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Newly issued visitor session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: VisitorSessionId,
}

/// The visitor's selection with its gating state.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResponse {
    pub items: Vec<SelectableItem>,
    pub has_tier: bool,
    pub has_subscription: bool,
    pub progress: PlanProgress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<NextStep>,
    pub gate: ContactGate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nudge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate_prompt: Option<String>,
}

impl From<SelectionView> for SelectionResponse {
    fn from(view: SelectionView) -> Self {
        Self {
            items: view.items,
            has_tier: view.has_tier,
            has_subscription: view.has_subscription,
            progress: view.progress,
            next_step: view.next_step,
            gate: view.gate,
            nudge: view.nudge.map(str::to_string),
            gate_prompt: view.gate_prompt.map(str::to_string),
        }
    }
}

/// Result of selecting an item.
#[derive(Debug, Clone, Serialize)]
pub struct SelectItemResponse {
    /// False when an already-selected interest was picked again.
    pub changed: bool,
    /// Id of the tier or subscription this pick displaced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced: Option<ItemId>,
    pub selection: SelectionResponse,
}

impl SelectItemResponse {
    pub fn new(outcome: &AddOutcome, selection: SelectionResponse) -> Self {
        let replaced = match outcome {
            AddOutcome::Replaced { previous } => Some(previous.id.clone()),
            AddOutcome::Added | AddOutcome::Duplicate | AddOutcome::LimitReached => None,
        };
        Self {
            changed: outcome.changed(),
            replaced,
            selection,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearSelectionResponse {
    pub removed: usize,
}

/// Token a second session can redeem for this selection.
#[derive(Debug, Clone, Serialize)]
pub struct HandoffResponse {
    pub token: String,
    pub expires_at: String,
    pub item_count: usize,
}

impl From<StashHandoffResult> for HandoffResponse {
    fn from(result: StashHandoffResult) -> Self {
        Self {
            token: result.token.to_string(),
            expires_at: result.expires_at.as_datetime().to_rfc3339(),
            item_count: result.item_count,
        }
    }
}
