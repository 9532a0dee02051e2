//! In-memory visitor session registry.
//!
//! Sessions live only as long as the process; an idle session is dropped
//! on lookup once its idle timeout has passed, or in bulk by `purge_idle`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::application::SelectionStore;
use crate::domain::foundation::{DomainError, Timestamp, VisitorSessionId};
use crate::ports::SelectionSessions;

#[derive(Debug, Clone)]
struct SessionEntry {
    store: SelectionStore,
    last_seen: Timestamp,
}

impl SessionEntry {
    fn is_idle(&self, now: &Timestamp, idle: Duration) -> bool {
        !now.is_before(&self.last_seen.plus_secs(idle.as_secs()))
    }
}

#[derive(Debug, Clone)]
pub struct InMemorySelectionSessions {
    sessions: Arc<RwLock<HashMap<VisitorSessionId, SessionEntry>>>,
    idle_timeout: Duration,
}

impl InMemorySelectionSessions {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SelectionSessions for InMemorySelectionSessions {
    async fn open(&self) -> Result<(VisitorSessionId, SelectionStore), DomainError> {
        let id = VisitorSessionId::new();
        let store = SelectionStore::new();
        self.sessions.write().await.insert(
            id,
            SessionEntry {
                store: store.clone(),
                last_seen: Timestamp::now(),
            },
        );
        tracing::debug!(session_id = %id, "Visitor session opened");
        Ok((id, store))
    }

    async fn find(&self, id: &VisitorSessionId) -> Result<Option<SelectionStore>, DomainError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;

        let idle = match sessions.get_mut(id) {
            None => return Ok(None),
            Some(entry) if entry.is_idle(&now, self.idle_timeout) => true,
            Some(entry) => {
                entry.last_seen = now;
                return Ok(Some(entry.store.clone()));
            }
        };

        if idle {
            sessions.remove(id);
            tracing::debug!(session_id = %id, "Visitor session expired");
        }
        Ok(None)
    }

    async fn close(&self, id: &VisitorSessionId) -> Result<bool, DomainError> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }

    async fn purge_idle(&self, idle: Duration) -> Result<usize, DomainError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_idle(&now, idle));
        Ok(before - sessions.len())
    }
}
