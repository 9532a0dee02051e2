//! RemoveItemHandler - Command handler for deselecting an item.

use std::sync::Arc;

use super::load_store;
use crate::application::AnalyticsEmitter;
use crate::domain::foundation::{ItemId, SerializableDomainEvent, Timestamp, VisitorSessionId};
use crate::domain::locale::Locale;
use crate::domain::selection::{ItemRemoved, SelectionError, SelectionSet};
use crate::ports::SelectionSessions;

#[derive(Debug, Clone)]
pub struct RemoveItemCommand {
    pub session_id: VisitorSessionId,
    pub item_id: ItemId,
    pub locale: Locale,
}

pub struct RemoveItemHandler {
    sessions: Arc<dyn SelectionSessions>,
    analytics: AnalyticsEmitter,
}

impl RemoveItemHandler {
    pub fn new(sessions: Arc<dyn SelectionSessions>, analytics: AnalyticsEmitter) -> Self {
        Self { sessions, analytics }
    }

    /// Removes the item if present. Removing an unselected id is a no-op and
    /// still succeeds.
    pub async fn handle(&self, cmd: RemoveItemCommand) -> Result<SelectionSet, SelectionError> {
        let store = load_store(&self.sessions, cmd.session_id).await?;

        if let Some(removed) = store.remove(&cmd.item_id) {
            tracing::info!(
                session_id = %cmd.session_id,
                item_id = %removed.id,
                "Item deselected"
            );
            let event = ItemRemoved {
                session_id: cmd.session_id,
                item_id: removed.id,
                category: removed.category,
                removed_at: Timestamp::now(),
            };
            self.analytics
                .emit(event.to_envelope().with_locale(cmd.locale.code()));
        }

        Ok(store.snapshot())
    }
}
