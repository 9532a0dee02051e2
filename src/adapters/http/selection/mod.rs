//! HTTP adapter for visitor sessions and the selection coordinator.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ClearSelectionResponse, HandoffResponse, SelectItemRequest, SelectItemResponse,
    SelectionResponse, SessionResponse,
};
pub use routes::selection_routes;
