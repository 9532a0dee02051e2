//! Selection sessions port - one live `SelectionStore` per visitor.

use async_trait::async_trait;
use std::time::Duration;

use crate::application::SelectionStore;
use crate::domain::foundation::{DomainError, VisitorSessionId};

/// Registry of visitor selection stores.
///
/// Stores are handed out by clone; every clone observes the same selection.
#[async_trait]
pub trait SelectionSessions: Send + Sync {
    /// Opens a new session with an empty selection.
    async fn open(&self) -> Result<(VisitorSessionId, SelectionStore), DomainError>;

    /// The store for `id`, refreshing its idle timer. `None` if unknown or expired.
    async fn find(&self, id: &VisitorSessionId) -> Result<Option<SelectionStore>, DomainError>;

    /// Drops a session. Returns whether it existed.
    async fn close(&self, id: &VisitorSessionId) -> Result<bool, DomainError>;

    /// Drops every session idle for longer than `idle`. Returns how many were dropped.
    async fn purge_idle(&self, idle: Duration) -> Result<usize, DomainError>;
}
