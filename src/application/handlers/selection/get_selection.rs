//! GetSelectionHandler - Query handler for the visitor's selection and gating.

use std::sync::Arc;

use super::load_store;
use crate::domain::foundation::VisitorSessionId;
use crate::domain::locale::Locale;
use crate::domain::selection::{
    ContactGate, NextStep, PlanProgress, SelectableItem, SelectionError, SelectionSet,
};
use crate::ports::SelectionSessions;

#[derive(Debug, Clone)]
pub struct GetSelectionQuery {
    pub session_id: VisitorSessionId,
    pub locale: Locale,
}

/// Everything a page needs to render the selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionView {
    pub items: Vec<SelectableItem>,
    pub has_tier: bool,
    pub has_subscription: bool,
    pub progress: PlanProgress,
    pub next_step: Option<NextStep>,
    pub gate: ContactGate,

    /// Localized plan nudge, absent once the plan is complete.
    pub nudge: Option<&'static str>,

    /// Localized "pick services first" prompt, absent once the form is open.
    pub gate_prompt: Option<&'static str>,
}

pub struct GetSelectionHandler {
    sessions: Arc<dyn SelectionSessions>,
}

impl GetSelectionHandler {
    pub fn new(sessions: Arc<dyn SelectionSessions>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: GetSelectionQuery) -> Result<SelectionView, SelectionError> {
        let store = load_store(&self.sessions, query.session_id).await?;
        Ok(SelectionView::from_set(store.snapshot(), query.locale))
    }
}

impl SelectionView {
    /// Derives the gating view of a snapshot in `locale`.
    pub fn from_set(set: SelectionSet, locale: Locale) -> Self {
        let progress = set.progress();
        let next_step = progress.next_step();
        let gate = set.gate();

        Self {
            has_tier: set.has_tier(),
            has_subscription: set.has_subscription(),
            progress,
            next_step,
            gate,
            nudge: next_step.map(|step| step.nudge(locale)),
            gate_prompt: gate.prompt(locale),
            items: set.into(),
        }
    }
}
