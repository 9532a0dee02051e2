//! ClearSelectionHandler - empties the visitor's selection.

use std::sync::Arc;

use super::load_store;
use crate::application::AnalyticsEmitter;
use crate::domain::foundation::{SerializableDomainEvent, Timestamp, VisitorSessionId};
use crate::domain::locale::Locale;
use crate::domain::selection::{SelectionCleared, SelectionError};
use crate::ports::SelectionSessions;

#[derive(Debug, Clone)]
pub struct ClearSelectionCommand {
    pub session_id: VisitorSessionId,
    pub locale: Locale,
}

pub struct ClearSelectionHandler {
    sessions: Arc<dyn SelectionSessions>,
    analytics: AnalyticsEmitter,
}

impl ClearSelectionHandler {
    pub fn new(sessions: Arc<dyn SelectionSessions>, analytics: AnalyticsEmitter) -> Self {
        Self { sessions, analytics }
    }

    /// Returns how many items were removed.
    pub async fn handle(&self, cmd: ClearSelectionCommand) -> Result<usize, SelectionError> {
        let store = load_store(&self.sessions, cmd.session_id).await?;
        let removed = store.clear();

        if removed > 0 {
            tracing::info!(session_id = %cmd.session_id, removed, "Selection cleared");
            let event = SelectionCleared {
                session_id: cmd.session_id,
                removed_count: removed,
                cleared_at: Timestamp::now(),
            };
            self.analytics
                .emit(event.to_envelope().with_locale(cmd.locale.code()));
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::selection::test_support::{fixture, subscription, tier};

    #[tokio::test]
    async fn clear_resets_flags_and_reports_count() {
        let fx = fixture().await;
        fx.store.add(tier("tier-plus"));
        fx.store.add(subscription("subscription-growth"));
        let handler = ClearSelectionHandler::new(fx.sessions.clone(), fx.emitter.clone());

        let removed = handler
            .handle(ClearSelectionCommand {
                session_id: fx.session_id,
                locale: Locale::En,
            })
            .await
            .unwrap();

        assert_eq!(removed, 2);
        assert!(!fx.store.has_tier());
        assert!(!fx.store.has_subscription());
        fx.analytics.settle(1).await;
        assert_eq!(fx.analytics.published_events()[0].payload["removed_count"], 2);
    }

    #[tokio::test]
    async fn clearing_empty_selection_emits_nothing() {
        let fx = fixture().await;
        let handler = ClearSelectionHandler::new(fx.sessions.clone(), fx.emitter.clone());

        let removed = handler
            .handle(ClearSelectionCommand {
                session_id: fx.session_id,
                locale: Locale::En,
            })
            .await
            .unwrap();

        assert_eq!(removed, 0);
        assert_eq!(fx.analytics.settle(1).await, 0);
    }
}
