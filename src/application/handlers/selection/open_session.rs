//! OpenSessionHandler - starts a visitor session with an empty selection.

use std::sync::Arc;

use crate::domain::foundation::VisitorSessionId;
use crate::domain::selection::SelectionError;
use crate::ports::SelectionSessions;

pub struct OpenSessionHandler {
    sessions: Arc<dyn SelectionSessions>,
}

impl OpenSessionHandler {
    pub fn new(sessions: Arc<dyn SelectionSessions>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self) -> Result<VisitorSessionId, SelectionError> {
        let (session_id, _store) = self.sessions.open().await?;
        tracing::info!(session_id = %session_id, "Visitor session started");
        Ok(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::selection::test_support::fixture;

    #[tokio::test]
    async fn opened_session_is_findable_and_empty() {
        let fx = fixture().await;
        let handler = OpenSessionHandler::new(fx.sessions.clone());

        let id = handler.handle().await.unwrap();

        let store = fx.sessions.find(&id).await.unwrap().unwrap();
        assert!(store.is_empty());
        assert_ne!(id, fx.session_id);
    }
}
