//! Redis-backed selection handoff for multi-server deployments.
//!
//! Snapshots are stored as JSON under `{prefix}:{token}` with `SET .. EX`
//! and read back with `GETDEL`, so a token is single-use even when two
//! servers race on it.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode, HandoffToken};
use crate::domain::selection::SelectionSet;
use crate::ports::SelectionHandoff;

const DEFAULT_KEY_PREFIX: &str = "agency-site:handoff";

#[derive(Clone)]
pub struct RedisSelectionHandoff {
    conn: MultiplexedConnection,
    key_prefix: String,
}

impl RedisSelectionHandoff {
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self {
            conn,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    fn key(&self, token: &HandoffToken) -> String {
        handoff_key(&self.key_prefix, token)
    }
}

fn handoff_key(prefix: &str, token: &HandoffToken) -> String {
    format!("{}:{}", prefix, token)
}

/// Unreadable payloads are treated as already redeemed.
fn decode_snapshot(token: &HandoffToken, json: &str) -> Option<SelectionSet> {
    match serde_json::from_str::<SelectionSet>(json) {
        Ok(set) => Some(set),
        Err(e) => {
            tracing::warn!(error = %e, token = %token, "Discarding unreadable handoff snapshot");
            None
        }
    }
}

fn cache_error(e: redis::RedisError) -> DomainError {
    DomainError::new(ErrorCode::CacheError, format!("Redis error: {}", e))
}

#[async_trait]
impl SelectionHandoff for RedisSelectionHandoff {
    async fn stash(&self, snapshot: &SelectionSet, ttl: Duration) -> Result<HandoffToken, DomainError> {
        let token = HandoffToken::new();
        let payload = serde_json::to_string(snapshot).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to encode snapshot: {}", e))
        })?;

        let mut conn = self.conn.clone();
        redis::cmd("SET")
            .arg(self.key(&token))
            .arg(payload)
            .arg("EX")
            .arg(ttl.as_secs().max(1))
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(cache_error)?;

        Ok(token)
    }

    async fn take(&self, token: &HandoffToken) -> Result<Option<SelectionSet>, DomainError> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = redis::cmd("GETDEL")
            .arg(self.key(token))
            .query_async(&mut conn)
            .await
            .map_err(cache_error)?;

        Ok(payload.and_then(|json| decode_snapshot(token, &json)))
    }
}

impl std::fmt::Debug for RedisSelectionHandoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSelectionHandoff")
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}
