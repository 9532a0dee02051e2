//! Application layer - the selection store, analytics emission and handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands mutate a visitor's `SelectionStore`; queries read a snapshot.

mod analytics;
mod store;

pub mod handlers;

pub use analytics::AnalyticsEmitter;
pub use store::{SelectionStore, TierChoice};

pub use handlers::{
    // Selection handlers
    AddItemCommand, AddItemHandler, AddItemResult,
    ClearSelectionCommand, ClearSelectionHandler,
    GetSelectionHandler, GetSelectionQuery, SelectionView,
    OpenSessionHandler,
    RemoveItemCommand, RemoveItemHandler,
    RestoreHandoffCommand, RestoreHandoffHandler,
    SelectTierCommand, SelectTierHandler,
    StashHandoffCommand, StashHandoffHandler, StashHandoffResult,
    // Contact handlers
    SubmitContactCommand, SubmitContactHandler, SubmitContactResult,
};
