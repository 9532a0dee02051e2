//! AnalyticsPublisher port - Interface for emitting analytics events.
//!
//! The selection and contact handlers describe what happened as domain
//! events; where they end up (log stream, in-memory recorder, a third-party
//! analytics API) is an adapter concern.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing analytics events.
///
/// Delivery is best-effort. Callers never block a visitor-facing operation
/// on it and only log failures.
///
/// # Example
///
/// ```ignore
/// let envelope = SelectionCleared { session_id, removed_count, cleared_at }.to_envelope();
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait AnalyticsPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish several events in order.
    ///
    /// Stops at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn AnalyticsPublisher) {}
}
