//! Analytics publisher implementations.
//!
//! - `TracingAnalyticsPublisher` - Production sink on the `analytics` log target
//! - `InMemoryAnalytics` - Recorder for tests

mod in_memory;
mod tracing_publisher;

pub use in_memory::InMemoryAnalytics;
pub use tracing_publisher::TracingAnalyticsPublisher;
