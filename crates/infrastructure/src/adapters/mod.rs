//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod condition_assets_adapter;
mod weather_adapter;

pub use condition_assets_adapter::StaticConditionAssets;
pub use weather_adapter::WeatherAdapter;
