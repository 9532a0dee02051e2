//! In-memory analytics recorder for testing.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::AnalyticsPublisher;

/// Records every published event for assertions.
///
/// # Example
///
/// ```ignore
/// let analytics = Arc::new(InMemoryAnalytics::new());
/// // ... drive a handler ...
/// assert!(analytics.has_event("selection.item_added"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryAnalytics {
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .expect("InMemoryAnalytics: published lock poisoned")
            .clone()
    }

    /// Base types (version suffix stripped) in publication order.
    pub fn event_types(&self) -> Vec<String> {
        self.published_events()
            .iter()
            .map(|e| e.base_type().to_string())
            .collect()
    }

    /// True if an event with this base type was published.
    pub fn has_event(&self, base_type: &str) -> bool {
        self.published
            .read()
            .expect("InMemoryAnalytics: published lock poisoned")
            .iter()
            .any(|e| e.base_type() == base_type)
    }

    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .expect("InMemoryAnalytics: published lock poisoned")
            .len()
    }

    pub fn clear(&self) {
        self.published
            .write()
            .expect("InMemoryAnalytics: published write lock poisoned")
            .clear();
    }

    /// Yields to the runtime until `count` events arrived or a bounded number
    /// of yields has passed. Emission is spawned, so tests wait on this.
    pub async fn settle(&self, count: usize) -> usize {
        for _ in 0..50 {
            if self.event_count() >= count {
                break;
            }
            tokio::task::yield_now().await;
        }
        self.event_count()
    }
}

#[async_trait]
impl AnalyticsPublisher for InMemoryAnalytics {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.published
            .write()
            .expect("InMemoryAnalytics: published write lock poisoned")
            .push(event);
        Ok(())
    }
}
