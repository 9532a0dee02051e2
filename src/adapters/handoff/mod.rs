//! Selection handoff stores.
//!
//! - `InMemorySelectionHandoff` - Process-local, the default
//! - `RedisSelectionHandoff` - Shared across servers

mod in_memory;
mod redis;

pub use self::redis::RedisSelectionHandoff;
pub use in_memory::InMemorySelectionHandoff;
