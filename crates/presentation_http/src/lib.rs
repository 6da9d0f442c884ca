//! Clima HTTP presentation layer
//!
//! JSON weather API and the server-rendered weather page. The provider API
//! key stays on the server; browsers only ever talk to this crate.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{RequestIdLayer, SecurityHeadersLayer};
pub use routes::create_router;
pub use state::AppState;
