//! Visitor session registries.

mod in_memory;

pub use in_memory::InMemorySelectionSessions;
