//! SelectTierHandler - pricing-grid tier choice under the configured policy.

use std::sync::Arc;

use super::load_store;
use crate::application::{AnalyticsEmitter, TierChoice};
use crate::domain::foundation::{SerializableDomainEvent, Timestamp, VisitorSessionId};
use crate::domain::locale::Locale;
use crate::domain::selection::{
    AddOutcome, ItemAdded, ItemCategory, SelectableItem, SelectionCleared, SelectionError,
    TierSelectionPolicy,
};
use crate::ports::SelectionSessions;

use super::AddItemResult;

#[derive(Debug, Clone)]
pub struct SelectTierCommand {
    pub session_id: VisitorSessionId,
    pub item: SelectableItem,
    pub locale: Locale,
}

pub struct SelectTierHandler {
    sessions: Arc<dyn SelectionSessions>,
    analytics: AnalyticsEmitter,
    policy: TierSelectionPolicy,
}

impl SelectTierHandler {
    pub fn new(
        sessions: Arc<dyn SelectionSessions>,
        analytics: AnalyticsEmitter,
        policy: TierSelectionPolicy,
    ) -> Self {
        Self {
            sessions,
            analytics,
            policy,
        }
    }

    pub async fn handle(&self, cmd: SelectTierCommand) -> Result<AddItemResult, SelectionError> {
        if cmd.item.category != ItemCategory::Tier {
            return Err(SelectionError::invalid_item(
                "category",
                format!("expected a tier, got {}", cmd.item.category),
            ));
        }

        let store = load_store(&self.sessions, cmd.session_id).await?;

        let item_id = cmd.item.id.clone();
        let title = cmd.item.title.clone();
        let TierChoice { outcome, discarded } = store.select_tier(cmd.item, self.policy);

        let replaced = match &outcome {
            AddOutcome::Replaced { previous } => Some(previous.id.clone()),
            _ => None,
        };

        tracing::info!(
            session_id = %cmd.session_id,
            item_id = %item_id,
            policy = ?self.policy,
            discarded,
            "Tier selected"
        );

        let now = Timestamp::now();
        let locale = cmd.locale.code();
        if discarded > 0 && self.policy.clears_on_tier() {
            let cleared = SelectionCleared {
                session_id: cmd.session_id,
                removed_count: discarded,
                cleared_at: now,
            };
            self.analytics.emit(cleared.to_envelope().with_locale(locale));
        }
        let added = ItemAdded {
            session_id: cmd.session_id,
            item_id,
            category: ItemCategory::Tier,
            title,
            replaced,
            added_at: now,
        };
        self.analytics.emit(added.to_envelope().with_locale(locale));

        Ok(AddItemResult {
            outcome,
            selection: store.snapshot(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::selection::test_support::{
        fixture, interest, subscription, tier,
    };

    fn command(session_id: VisitorSessionId, item: SelectableItem) -> SelectTierCommand {
        SelectTierCommand {
            session_id,
            item,
            locale: Locale::En,
        }
    }

    #[tokio::test]
    async fn start_fresh_clears_earlier_picks() {
        let fx = fixture().await;
        fx.store.add(interest("seo"));
        fx.store.add(subscription("subscription-growth"));
        let handler = SelectTierHandler::new(
            fx.sessions.clone(),
            fx.emitter.clone(),
            TierSelectionPolicy::StartFresh,
        );

        let result = handler.handle(command(fx.session_id, tier("tier-plus"))).await.unwrap();

        assert_eq!(result.selection.len(), 1);
        assert!(fx.store.has_tier());
        assert!(!fx.store.has_subscription());

        assert_eq!(fx.analytics.settle(2).await, 2);
        assert!(fx.analytics.has_event("selection.cleared"));
        assert!(fx.analytics.has_event("selection.item_added"));
    }

    #[tokio::test]
    async fn replacing_the_only_tier_discards_nothing_else() {
        let fx = fixture().await;
        fx.store.add(tier("tier-basic"));
        let handler = SelectTierHandler::new(
            fx.sessions.clone(),
            fx.emitter.clone(),
            TierSelectionPolicy::StartFresh,
        );

        let result = handler.handle(command(fx.session_id, tier("tier-plus"))).await.unwrap();

        assert!(matches!(result.outcome, AddOutcome::Replaced { .. }));
        fx.analytics.settle(1).await;
        assert_eq!(fx.analytics.event_types(), vec!["selection.item_added"]);
    }

    #[tokio::test]
    async fn keep_interests_only_replaces_tier() {
        let fx = fixture().await;
        fx.store.add(interest("seo"));
        fx.store.add(tier("tier-basic"));
        let handler = SelectTierHandler::new(
            fx.sessions.clone(),
            fx.emitter.clone(),
            TierSelectionPolicy::KeepInterests,
        );

        let result = handler.handle(command(fx.session_id, tier("tier-plus"))).await.unwrap();

        assert_eq!(result.selection.len(), 2);
        assert!(matches!(result.outcome, AddOutcome::Replaced { .. }));
        fx.analytics.settle(1).await;
        assert_eq!(fx.analytics.event_types(), vec!["selection.item_added"]);
    }

    #[tokio::test]
    async fn rejects_non_tier_items() {
        let fx = fixture().await;
        let handler = SelectTierHandler::new(
            fx.sessions.clone(),
            fx.emitter.clone(),
            TierSelectionPolicy::StartFresh,
        );

        let result = handler.handle(command(fx.session_id, interest("seo"))).await;

        assert!(matches!(result, Err(SelectionError::InvalidItem { .. })));
        assert!(fx.store.is_empty());
    }
}
