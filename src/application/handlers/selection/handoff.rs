//! Handoff handlers - move a selection from one visitor session to another.
//!
//! The source session stashes a snapshot and receives a short-lived token;
//! the destination session redeems the token once, and the snapshot replaces
//! whatever it had selected.

use std::sync::Arc;
use std::time::Duration;

use super::load_store;
use crate::application::AnalyticsEmitter;
use crate::domain::foundation::{HandoffToken, SerializableDomainEvent, Timestamp, VisitorSessionId};
use crate::domain::locale::Locale;
use crate::domain::selection::{SelectionError, SelectionRestored, SelectionSet};
use crate::ports::{SelectionHandoff, SelectionSessions};

// ════════════════════════════════════════════════════════════════════════════
// Stash
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct StashHandoffCommand {
    pub session_id: VisitorSessionId,
}

#[derive(Debug, Clone)]
pub struct StashHandoffResult {
    pub token: HandoffToken,
    pub expires_at: Timestamp,
    pub item_count: usize,
}

pub struct StashHandoffHandler {
    sessions: Arc<dyn SelectionSessions>,
    handoff: Arc<dyn SelectionHandoff>,
    ttl: Duration,
}

impl StashHandoffHandler {
    pub fn new(
        sessions: Arc<dyn SelectionSessions>,
        handoff: Arc<dyn SelectionHandoff>,
        ttl: Duration,
    ) -> Self {
        Self {
            sessions,
            handoff,
            ttl,
        }
    }

    pub async fn handle(&self, cmd: StashHandoffCommand) -> Result<StashHandoffResult, SelectionError> {
        let store = load_store(&self.sessions, cmd.session_id).await?;
        let snapshot = store.snapshot();

        let token = self.handoff.stash(&snapshot, self.ttl).await?;
        tracing::info!(
            session_id = %cmd.session_id,
            items = snapshot.len(),
            ttl_secs = self.ttl.as_secs(),
            "Selection stashed for handoff"
        );

        Ok(StashHandoffResult {
            token,
            expires_at: Timestamp::now().plus_secs(self.ttl.as_secs()),
            item_count: snapshot.len(),
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Restore
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct RestoreHandoffCommand {
    pub session_id: VisitorSessionId,
    pub token: HandoffToken,
    pub locale: Locale,
}

pub struct RestoreHandoffHandler {
    sessions: Arc<dyn SelectionSessions>,
    handoff: Arc<dyn SelectionHandoff>,
    analytics: AnalyticsEmitter,
}

impl RestoreHandoffHandler {
    pub fn new(
        sessions: Arc<dyn SelectionSessions>,
        handoff: Arc<dyn SelectionHandoff>,
        analytics: AnalyticsEmitter,
    ) -> Self {
        Self {
            sessions,
            handoff,
            analytics,
        }
    }

    /// Overwrites the destination selection with the stashed snapshot.
    pub async fn handle(&self, cmd: RestoreHandoffCommand) -> Result<SelectionSet, SelectionError> {
        let store = load_store(&self.sessions, cmd.session_id).await?;

        let snapshot = self
            .handoff
            .take(&cmd.token)
            .await?
            .ok_or_else(|| SelectionError::handoff_not_found(cmd.token))?;

        let item_count = snapshot.len();
        store.replace_all(snapshot);
        tracing::info!(session_id = %cmd.session_id, items = item_count, "Selection restored from handoff");

        let event = SelectionRestored {
            session_id: cmd.session_id,
            item_count,
            restored_at: Timestamp::now(),
        };
        self.analytics
            .emit(event.to_envelope().with_locale(cmd.locale.code()));

        Ok(store.snapshot())
    }
}
