//! The visitor's ordered selection.
//!
//! # Invariants
//!
//! - Insertion order is preserved (display only).
//! - No two items share an id.
//! - At most one `Tier` item and at most one `Subscription` item.

use serde::{Deserialize, Serialize};

use super::{ContactGate, ItemCategory, PlanProgress, SelectableItem, TierSelectionPolicy};
use crate::domain::foundation::ItemId;

/// Result of [`SelectionSet::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Appended; nothing was displaced.
    Added,

    /// Appended after removing the previous item of the same category.
    Replaced { previous: SelectableItem },

    /// An interest item with this id was already selected; nothing changed.
    Duplicate,

    /// The set already holds [`SelectionSet::MAX_INTERESTS`] interest items;
    /// nothing changed.
    LimitReached,
}

impl AddOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, AddOutcome::Duplicate | AddOutcome::LimitReached)
    }
}

/// Ordered collection of the currently selected items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SelectableItem>", into = "Vec<SelectableItem>")]
pub struct SelectionSet {
    items: Vec<SelectableItem>,
}

impl SelectionSet {
    /// Cap on interest items per selection.
    pub const MAX_INTERESTS: usize = 50;

    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item.
    ///
    /// Tier and subscription items replace any existing item of their category
    /// and are appended at the end. Interest items are appended unless their id
    /// is already present.
    pub fn add(&mut self, item: SelectableItem) -> AddOutcome {
        if item.category.is_exclusive() {
            let previous = self
                .items
                .iter()
                .position(|existing| existing.category == item.category)
                .map(|index| self.items.remove(index));
            // A same-id item in another category would otherwise become a duplicate.
            self.items.retain(|existing| existing.id != item.id);
            self.items.push(item);
            match previous {
                Some(previous) => AddOutcome::Replaced { previous },
                None => AddOutcome::Added,
            }
        } else if self.is_selected(&item.id) {
            AddOutcome::Duplicate
        } else if self.interest_count() >= Self::MAX_INTERESTS {
            AddOutcome::LimitReached
        } else {
            self.items.push(item);
            AddOutcome::Added
        }
    }

    fn interest_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.category == ItemCategory::Interest)
            .count()
    }

    /// Removes the item with `id`; returns it if it was present.
    pub fn remove(&mut self, id: &ItemId) -> Option<SelectableItem> {
        self.items
            .iter()
            .position(|item| &item.id == id)
            .map(|index| self.items.remove(index))
    }

    /// Empties the set; returns how many items were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    /// Removes the items that appear unchanged in `sent`; returns how many
    /// were removed. Items added or replaced since `sent` was taken stay.
    pub fn remove_matching(&mut self, sent: &SelectionSet) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !sent.items.contains(item));
        before - self.items.len()
    }

    /// Pricing-grid tier choice under a policy.
    ///
    /// With [`TierSelectionPolicy::StartFresh`] every earlier pick, interests
    /// included, is discarded before the tier is added.
    pub fn select_tier(&mut self, item: SelectableItem, policy: TierSelectionPolicy) -> AddOutcome {
        if item.category == ItemCategory::Tier && policy.clears_on_tier() {
            let previous = self.tier().cloned();
            self.clear();
            self.add(item);
            return match previous {
                Some(previous) => AddOutcome::Replaced { previous },
                None => AddOutcome::Added,
            };
        }
        self.add(item)
    }

    /// Overwrites the whole set, re-applying the category rules while loading.
    pub fn replace_all(&mut self, items: impl IntoIterator<Item = SelectableItem>) {
        self.items.clear();
        for item in items {
            self.add(item);
        }
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    pub fn has_tier(&self) -> bool {
        self.tier().is_some()
    }

    pub fn has_subscription(&self) -> bool {
        self.subscription().is_some()
    }

    /// The selected tier, if any.
    pub fn tier(&self) -> Option<&SelectableItem> {
        self.first_of(ItemCategory::Tier)
    }

    /// The selected care subscription, if any.
    pub fn subscription(&self) -> Option<&SelectableItem> {
        self.first_of(ItemCategory::Subscription)
    }

    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectableItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn progress(&self) -> PlanProgress {
        PlanProgress::from_flags(self.has_tier(), self.has_subscription())
    }

    pub fn gate(&self) -> ContactGate {
        if self.is_empty() {
            ContactGate::SelectionRequired
        } else {
            ContactGate::Ready
        }
    }

    fn first_of(&self, category: ItemCategory) -> Option<&SelectableItem> {
        self.items.iter().find(|item| item.category == category)
    }
}

impl From<Vec<SelectableItem>> for SelectionSet {
    fn from(items: Vec<SelectableItem>) -> Self {
        let mut set = SelectionSet::new();
        set.replace_all(items);
        set
    }
}

impl From<SelectionSet> for Vec<SelectableItem> {
    fn from(set: SelectionSet) -> Self {
        set.items
    }
}
