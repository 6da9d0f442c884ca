//! Tracing subscriber setup
//!
//! Console logging through `tracing-subscriber`, human-readable or JSON.

mod subscriber;

pub use subscriber::{TelemetryError, build_filter, init_tracing};
