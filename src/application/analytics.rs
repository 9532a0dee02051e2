//! Fire-and-forget analytics emission.

use std::sync::Arc;

use crate::domain::foundation::EventEnvelope;
use crate::ports::AnalyticsPublisher;

/// Hands events to an `AnalyticsPublisher` on a background task.
///
/// A disabled emitter drops events. Publisher failures are logged and never
/// reach the caller.
#[derive(Clone)]
pub struct AnalyticsEmitter {
    publisher: Option<Arc<dyn AnalyticsPublisher>>,
}

impl AnalyticsEmitter {
    pub fn new(publisher: Arc<dyn AnalyticsPublisher>) -> Self {
        Self {
            publisher: Some(publisher),
        }
    }

    pub fn disabled() -> Self {
        Self { publisher: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.publisher.is_some()
    }

    /// Spawns publication of `event` and returns immediately.
    pub fn emit(&self, event: EventEnvelope) {
        let Some(publisher) = self.publisher.clone() else {
            return;
        };
        tokio::spawn(async move {
            let event_type = event.event_type.clone();
            if let Err(e) = publisher.publish(event).await {
                tracing::debug!(error = %e, event_type = %event_type, "Analytics event dropped");
            }
        });
    }
}

impl std::fmt::Debug for AnalyticsEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsEmitter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
