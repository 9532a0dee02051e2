//! SelectionStore - the shared, observable selection of one visitor.
//!
//! Every surface that shows or edits the selection (pricing grid, service
//! cards, contact form) holds a clone of the same store. Each mutation is
//! applied atomically and, when it changes the set, published to every
//! subscriber.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::foundation::ItemId;
use crate::domain::selection::{
    AddOutcome, ContactGate, PlanProgress, SelectableItem, SelectionSet, TierSelectionPolicy,
};

/// Result of [`SelectionStore::select_tier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierChoice {
    pub outcome: AddOutcome,
    /// Items dropped besides the replaced tier, counted under the same lock
    /// as the mutation.
    pub discarded: usize,
}

/// Injectable handle to a visitor's selection.
#[derive(Clone)]
pub struct SelectionStore {
    tx: Arc<watch::Sender<SelectionSet>>,
}

impl SelectionStore {
    /// A store holding an empty selection.
    pub fn new() -> Self {
        Self::from_set(SelectionSet::new())
    }

    pub fn from_set(set: SelectionSet) -> Self {
        let (tx, _rx) = watch::channel(set);
        Self { tx: Arc::new(tx) }
    }

    /// Receiver that sees the current set and every later change.
    pub fn subscribe(&self) -> watch::Receiver<SelectionSet> {
        self.tx.subscribe()
    }

    pub fn add(&self, item: SelectableItem) -> AddOutcome {
        self.mutate(|set| {
            let outcome = set.add(item);
            let changed = outcome.changed();
            (outcome, changed)
        })
    }

    pub fn select_tier(&self, item: SelectableItem, policy: TierSelectionPolicy) -> TierChoice {
        self.mutate(|set| {
            let before = set.len();
            let outcome = set.select_tier(item, policy);
            let changed = outcome.changed();
            let discarded = if changed {
                let replaced = usize::from(matches!(outcome, AddOutcome::Replaced { .. }));
                (before + 1).saturating_sub(set.len()).saturating_sub(replaced)
            } else {
                0
            };
            (TierChoice { outcome, discarded }, changed)
        })
    }

    pub fn remove(&self, id: &ItemId) -> Option<SelectableItem> {
        self.mutate(|set| {
            let removed = set.remove(id);
            let changed = removed.is_some();
            (removed, changed)
        })
    }

    /// Empties the set; returns how many items were removed.
    pub fn clear(&self) -> usize {
        self.mutate(|set| {
            let removed = set.clear();
            (removed, removed > 0)
        })
    }

    /// Removes what `sent` holds, keeping anything selected since it was
    /// taken; returns how many items were removed.
    pub fn remove_sent(&self, sent: &SelectionSet) -> usize {
        self.mutate(|set| {
            let removed = set.remove_matching(sent);
            (removed, removed > 0)
        })
    }

    /// Overwrites the selection wholesale.
    pub fn replace_all(&self, snapshot: SelectionSet) {
        self.mutate(|set| {
            let changed = *set != snapshot;
            *set = snapshot;
            ((), changed)
        })
    }

    /// Copy of the current set.
    pub fn snapshot(&self) -> SelectionSet {
        self.tx.borrow().clone()
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.tx.borrow().is_selected(id)
    }

    pub fn has_tier(&self) -> bool {
        self.tx.borrow().has_tier()
    }

    pub fn has_subscription(&self) -> bool {
        self.tx.borrow().has_subscription()
    }

    pub fn progress(&self) -> PlanProgress {
        self.tx.borrow().progress()
    }

    pub fn gate(&self) -> ContactGate {
        self.tx.borrow().gate()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Applies `op` under the channel lock. `op` reports whether it changed
    /// the set; subscribers are only woken when it did.
    fn mutate<R>(&self, op: impl FnOnce(&mut SelectionSet) -> (R, bool)) -> R {
        let mut result = None;
        let mut before = PlanProgress::None;
        let mut after = PlanProgress::None;

        self.tx.send_if_modified(|set| {
            before = set.progress();
            let (value, changed) = op(set);
            after = set.progress();
            result = Some(value);
            changed
        });

        if before != after {
            tracing::debug!(from = ?before, to = ?after, "plan progress changed");
        }

        match result {
            Some(value) => value,
            None => unreachable!("send_if_modified always runs its closure"),
        }
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("items", &self.len())
            .field("subscribers", &self.tx.receiver_count())
            .finish()
    }
}
