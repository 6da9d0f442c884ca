//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the OpenWeatherMap
//! backed weather adapter and the condition asset table. Also owns
//! configuration loading, tracing setup and HTML templates.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, AssetsConfig, ServerConfig, TelemetryAppConfig, UiConfig, WeatherAppConfig};
pub use telemetry::{TelemetryError, init_tracing};
pub use templates::{TemplateEngine, TemplateError};
