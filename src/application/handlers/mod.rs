//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod contact;
pub mod selection;

pub use contact::{SubmitContactCommand, SubmitContactHandler, SubmitContactResult};
pub use selection::{
    AddItemCommand, AddItemHandler, AddItemResult, ClearSelectionCommand, ClearSelectionHandler,
    GetSelectionHandler, GetSelectionQuery, OpenSessionHandler, RemoveItemCommand,
    RemoveItemHandler, RestoreHandoffCommand, RestoreHandoffHandler, SelectTierCommand,
    SelectTierHandler, SelectionView, StashHandoffCommand, StashHandoffHandler,
    StashHandoffResult,
};
