//! Selection module - what the visitor has picked and what it unlocks.
//!
//! A `SelectionSet` holds at most one website tier, at most one care
//! subscription and any number of interest services. Its contents drive the
//! contact gate and the two-step plan progress.

mod errors;
mod item;
mod policy;
mod progress;
mod set;

pub mod events;

pub use errors::SelectionError;
pub use events::{ItemAdded, ItemRemoved, SelectionCleared, SelectionRestored};
pub use item::{ItemCategory, SelectableItem, MAX_DESCRIPTION_LEN, MAX_LABEL_LEN};
pub use policy::TierSelectionPolicy;
pub use progress::{ContactGate, NextStep, PlanProgress};
pub use set::{AddOutcome, SelectionSet};
