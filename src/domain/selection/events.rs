//! Selection domain events.
//!
//! Published to analytics when a visitor's selection changes:
//! - `ItemAdded` - An item was appended (possibly replacing one of its category)
//! - `ItemRemoved` - An item was deselected
//! - `SelectionCleared` - The whole set was emptied
//! - `SelectionRestored` - A handed-off snapshot overwrote the set

use serde::{Deserialize, Serialize};

use super::ItemCategory;
use crate::domain::foundation::{domain_event, ItemId, Timestamp, VisitorSessionId};

// ════════════════════════════════════════════════════════════════════════════
// ItemAdded
// ════════════════════════════════════════════════════════════════════════════

/// Published when an item enters the selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemAdded {
    pub session_id: VisitorSessionId,
    pub item_id: ItemId,
    pub category: ItemCategory,
    pub title: String,

    /// Item of the same category that was displaced, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced: Option<ItemId>,

    pub added_at: Timestamp,
}

domain_event!(
    ItemAdded,
    event_type = "selection.item_added.v1",
    aggregate_id = session_id,
    aggregate_type = "Selection",
    occurred_at = added_at
);

// ════════════════════════════════════════════════════════════════════════════
// ItemRemoved
// ════════════════════════════════════════════════════════════════════════════

/// Published when an item is deselected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub session_id: VisitorSessionId,
    pub item_id: ItemId,
    pub category: ItemCategory,
    pub removed_at: Timestamp,
}

domain_event!(
    ItemRemoved,
    event_type = "selection.item_removed.v1",
    aggregate_id = session_id,
    aggregate_type = "Selection",
    occurred_at = removed_at
);

// ════════════════════════════════════════════════════════════════════════════
// SelectionCleared
// ════════════════════════════════════════════════════════════════════════════

/// Published when the set is emptied, by the visitor or after a successful
/// contact submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionCleared {
    pub session_id: VisitorSessionId,
    pub removed_count: usize,
    pub cleared_at: Timestamp,
}

domain_event!(
    SelectionCleared,
    event_type = "selection.cleared.v1",
    aggregate_id = session_id,
    aggregate_type = "Selection",
    occurred_at = cleared_at
);

// ════════════════════════════════════════════════════════════════════════════
// SelectionRestored
// ════════════════════════════════════════════════════════════════════════════

/// Published when a handoff snapshot replaces the set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRestored {
    pub session_id: VisitorSessionId,
    pub item_count: usize,
    pub restored_at: Timestamp,
}

domain_event!(
    SelectionRestored,
    event_type = "selection.restored.v1",
    aggregate_id = session_id,
    aggregate_type = "Selection",
    occurred_at = restored_at
);
