//! Application layer - Use cases and orchestration
//!
//! Defines the ports the weather UI depends on and the use cases built on
//! them: the query use case, the stateful query controller, the presenter
//! that turns snapshots into display cards, and ambient sound selection.

pub mod error;
pub mod messages;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, QueryError};
pub use messages::{Locale, Messages};
pub use ports::*;
pub use services::*;
