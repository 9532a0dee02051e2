//! Selection command and query handlers.

mod add_item;
mod clear_selection;
mod get_selection;
mod handoff;
mod open_session;
mod remove_item;
mod select_tier;

pub use add_item::{AddItemCommand, AddItemHandler, AddItemResult};
pub use clear_selection::{ClearSelectionCommand, ClearSelectionHandler};
pub use get_selection::{GetSelectionHandler, GetSelectionQuery, SelectionView};
pub use handoff::{
    RestoreHandoffCommand, RestoreHandoffHandler, StashHandoffCommand, StashHandoffHandler,
    StashHandoffResult,
};
pub use open_session::OpenSessionHandler;
pub use remove_item::{RemoveItemCommand, RemoveItemHandler};
pub use select_tier::{SelectTierCommand, SelectTierHandler};

use std::sync::Arc;

use crate::application::SelectionStore;
use crate::domain::foundation::VisitorSessionId;
use crate::domain::selection::SelectionError;
use crate::ports::SelectionSessions;

/// Looks up the visitor's store or fails with `SessionNotFound`.
pub(crate) async fn load_store(
    sessions: &Arc<dyn SelectionSessions>,
    session_id: VisitorSessionId,
) -> Result<SelectionStore, SelectionError> {
    sessions
        .find(&session_id)
        .await?
        .ok_or_else(|| SelectionError::session_not_found(session_id))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::adapters::analytics::InMemoryAnalytics;
    use crate::adapters::sessions::InMemorySelectionSessions;
    use crate::application::{AnalyticsEmitter, SelectionStore};
    use crate::domain::foundation::VisitorSessionId;
    use crate::domain::selection::SelectableItem;
    use crate::ports::SelectionSessions;

    pub struct Fixture {
        pub sessions: Arc<dyn SelectionSessions>,
        pub analytics: Arc<InMemoryAnalytics>,
        pub emitter: AnalyticsEmitter,
        pub session_id: VisitorSessionId,
        pub store: SelectionStore,
    }

    pub async fn fixture() -> Fixture {
        let sessions: Arc<dyn SelectionSessions> =
            Arc::new(InMemorySelectionSessions::new(Duration::from_secs(3600)));
        let analytics = Arc::new(InMemoryAnalytics::new());
        let emitter = AnalyticsEmitter::new(analytics.clone());
        let (session_id, store) = sessions.open().await.unwrap();
        Fixture {
            sessions,
            analytics,
            emitter,
            session_id,
            store,
        }
    }

    pub fn tier(id: &str) -> SelectableItem {
        SelectableItem::tier(id, "Tier").unwrap()
    }

    pub fn subscription(id: &str) -> SelectableItem {
        SelectableItem::subscription(id, "Care").unwrap()
    }

    pub fn interest(id: &str) -> SelectableItem {
        SelectableItem::interest(id, "Service").unwrap()
    }
}
