//! Selection handoff port - carries a selection snapshot between sessions.
//!
//! Used when a visitor moves from one browsing context to another (e.g. a
//! link opened on another device). Best-effort and non-durable: entries
//! expire, the last stash wins, and a token can be taken only once.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::foundation::{DomainError, HandoffToken};
use crate::domain::selection::SelectionSet;

#[async_trait]
pub trait SelectionHandoff: Send + Sync {
    /// Stores a snapshot for `ttl` and returns the token that retrieves it.
    async fn stash(&self, snapshot: &SelectionSet, ttl: Duration) -> Result<HandoffToken, DomainError>;

    /// Removes and returns the snapshot. `None` when unknown, expired or
    /// already taken.
    async fn take(&self, token: &HandoffToken) -> Result<Option<SelectionSet>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SelectionHandoff) {}
}
