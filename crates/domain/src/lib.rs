//! Domain layer for Clima
//!
//! Contains the weather vocabulary, value objects, the forecast aggregation
//! routine and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod forecast;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use forecast::{DaySummary, ForecastSample, MAX_FORECAST_DAYS, aggregate};
pub use value_objects::*;
