//! AddItemHandler - Command handler for selecting an item.

use std::sync::Arc;

use super::load_store;
use crate::application::AnalyticsEmitter;
use crate::domain::foundation::{SerializableDomainEvent, Timestamp, VisitorSessionId};
use crate::domain::locale::Locale;
use crate::domain::selection::{AddOutcome, ItemAdded, SelectableItem, SelectionError, SelectionSet};
use crate::ports::SelectionSessions;

/// Command to add an item to the visitor's selection.
#[derive(Debug, Clone)]
pub struct AddItemCommand {
    pub session_id: VisitorSessionId,
    pub item: SelectableItem,
    pub locale: Locale,
}

/// Result of an add.
#[derive(Debug, Clone)]
pub struct AddItemResult {
    pub outcome: AddOutcome,
    pub selection: SelectionSet,
}

pub struct AddItemHandler {
    sessions: Arc<dyn SelectionSessions>,
    analytics: AnalyticsEmitter,
}

impl AddItemHandler {
    pub fn new(sessions: Arc<dyn SelectionSessions>, analytics: AnalyticsEmitter) -> Self {
        Self { sessions, analytics }
    }

    pub async fn handle(&self, cmd: AddItemCommand) -> Result<AddItemResult, SelectionError> {
        let store = load_store(&self.sessions, cmd.session_id).await?;

        let item_id = cmd.item.id.clone();
        let category = cmd.item.category;
        let title = cmd.item.title.clone();

        let outcome = store.add(cmd.item);

        if outcome == AddOutcome::LimitReached {
            tracing::info!(session_id = %cmd.session_id, item_id = %item_id, "Interest limit reached");
            return Err(SelectionError::invalid_item(
                "items",
                format!("at most {} services can be selected", SelectionSet::MAX_INTERESTS),
            ));
        }

        if outcome.changed() {
            let replaced = match &outcome {
                AddOutcome::Replaced { previous } => Some(previous.id.clone()),
                _ => None,
            };
            tracing::info!(
                session_id = %cmd.session_id,
                item_id = %item_id,
                category = %category,
                replaced = ?replaced,
                "Item selected"
            );

            let event = ItemAdded {
                session_id: cmd.session_id,
                item_id,
                category,
                title,
                replaced,
                added_at: Timestamp::now(),
            };
            self.analytics
                .emit(event.to_envelope().with_locale(cmd.locale.code()));
        }

        Ok(AddItemResult {
            outcome,
            selection: store.snapshot(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::selection::test_support::{fixture, interest, tier};
    use crate::domain::foundation::ItemId;

    #[tokio::test]
    async fn adds_item_and_emits_event() {
        let fx = fixture().await;
        let handler = AddItemHandler::new(fx.sessions.clone(), fx.emitter.clone());

        let result = handler
            .handle(AddItemCommand {
                session_id: fx.session_id,
                item: interest("seo"),
                locale: Locale::Ko,
            })
            .await
            .unwrap();

        assert_eq!(result.outcome, AddOutcome::Added);
        assert_eq!(result.selection.len(), 1);
        assert!(fx.store.is_selected(&ItemId::new("seo").unwrap()));

        assert_eq!(fx.analytics.settle(1).await, 1);
        let event = &fx.analytics.published_events()[0];
        assert_eq!(event.base_type(), "selection.item_added");
        assert_eq!(event.metadata.locale.as_deref(), Some("ko"));
    }

    #[tokio::test]
    async fn replacing_tier_reports_previous() {
        let fx = fixture().await;
        let handler = AddItemHandler::new(fx.sessions.clone(), fx.emitter.clone());
        fx.store.add(tier("tier-basic"));

        let result = handler
            .handle(AddItemCommand {
                session_id: fx.session_id,
                item: tier("tier-plus"),
                locale: Locale::En,
            })
            .await
            .unwrap();

        assert!(matches!(result.outcome, AddOutcome::Replaced { .. }));
        fx.analytics.settle(1).await;
        assert_eq!(fx.analytics.published_events()[0].payload["replaced"], "tier-basic");
    }

    #[tokio::test]
    async fn duplicate_interest_emits_nothing() {
        let fx = fixture().await;
        let handler = AddItemHandler::new(fx.sessions.clone(), fx.emitter.clone());
        fx.store.add(interest("seo"));

        let result = handler
            .handle(AddItemCommand {
                session_id: fx.session_id,
                item: interest("seo"),
                locale: Locale::En,
            })
            .await
            .unwrap();

        assert_eq!(result.outcome, AddOutcome::Duplicate);
        assert_eq!(fx.analytics.settle(1).await, 0);
    }

    #[tokio::test]
    async fn interest_past_the_cap_is_rejected() {
        let fx = fixture().await;
        let handler = AddItemHandler::new(fx.sessions.clone(), fx.emitter.clone());
        for n in 0..SelectionSet::MAX_INTERESTS {
            fx.store.add(interest(&format!("service-{}", n)));
        }

        let result = handler
            .handle(AddItemCommand {
                session_id: fx.session_id,
                item: interest("one-more"),
                locale: Locale::En,
            })
            .await;

        assert!(matches!(result, Err(SelectionError::InvalidItem { ref field, .. }) if field == "items"));
        assert_eq!(fx.store.len(), SelectionSet::MAX_INTERESTS);
        assert_eq!(fx.analytics.settle(1).await, 0);
    }

    #[tokio::test]
    async fn unknown_session_fails() {
        let fx = fixture().await;
        let handler = AddItemHandler::new(fx.sessions.clone(), fx.emitter.clone());
        let missing = VisitorSessionId::new();

        let result = handler
            .handle(AddItemCommand {
                session_id: missing,
                item: interest("seo"),
                locale: Locale::En,
            })
            .await;

        assert_eq!(result.unwrap_err(), SelectionError::session_not_found(missing));
    }
}
