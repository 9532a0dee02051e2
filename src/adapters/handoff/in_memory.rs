//! In-memory selection handoff for single-server deployments and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, HandoffToken, Timestamp};
use crate::domain::selection::SelectionSet;
use crate::ports::SelectionHandoff;

#[derive(Debug, Clone)]
struct Entry {
    snapshot: SelectionSet,
    expires_at: Timestamp,
}

impl Entry {
    fn is_expired(&self, now: &Timestamp) -> bool {
        !now.is_before(&self.expires_at)
    }
}

/// Handoff entries kept in a process-local map.
///
/// Expired entries are dropped lazily on every stash.
#[derive(Debug, Clone, Default)]
pub struct InMemorySelectionHandoff {
    entries: Arc<RwLock<HashMap<HandoffToken, Entry>>>,
}

impl InMemorySelectionHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl SelectionHandoff for InMemorySelectionHandoff {
    async fn stash(&self, snapshot: &SelectionSet, ttl: Duration) -> Result<HandoffToken, DomainError> {
        let now = Timestamp::now();
        let token = HandoffToken::new();

        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| !entry.is_expired(&now));
        entries.insert(
            token,
            Entry {
                snapshot: snapshot.clone(),
                expires_at: now.plus_secs(ttl.as_secs()),
            },
        );

        Ok(token)
    }

    async fn take(&self, token: &HandoffToken) -> Result<Option<SelectionSet>, DomainError> {
        let entry = self.entries.write().await.remove(token);
        let now = Timestamp::now();
        Ok(entry
            .filter(|entry| !entry.is_expired(&now))
            .map(|entry| entry.snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::SelectableItem;

    fn snapshot() -> SelectionSet {
        let mut set = SelectionSet::new();
        set.add(SelectableItem::tier("tier-plus", "Plus").unwrap());
        set.add(SelectableItem::interest("seo", "SEO").unwrap());
        set
    }

    #[tokio::test]
    async fn take_returns_stashed_snapshot_once() {
        let handoff = InMemorySelectionHandoff::new();
        let token = handoff.stash(&snapshot(), Duration::from_secs(60)).await.unwrap();

        assert_eq!(handoff.take(&token).await.unwrap(), Some(snapshot()));
        assert_eq!(handoff.take(&token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn unknown_token_is_none() {
        let handoff = InMemorySelectionHandoff::new();
        assert_eq!(handoff.take(&HandoffToken::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn expired_entry_behaves_as_missing() {
        let handoff = InMemorySelectionHandoff::new();
        let token = handoff.stash(&snapshot(), Duration::ZERO).await.unwrap();
        assert_eq!(handoff.take(&token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn stash_drops_expired_entries() {
        let handoff = InMemorySelectionHandoff::new();
        handoff.stash(&snapshot(), Duration::ZERO).await.unwrap();
        handoff.stash(&snapshot(), Duration::from_secs(60)).await.unwrap();
        assert_eq!(handoff.len().await, 1);
    }
}
