//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap 2.5 API (<https://openweathermap.org/api>).
//! Fetches current conditions and the 5-day / 3-hour forecast for a free-text
//! city name, and validates provider responses before they reach the domain.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::CityName;
//! use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig};
//!
//! let client = OpenWeatherMapClient::new(WeatherConfig::with_api_key("..."))?;
//! let city = CityName::parse("Porto Alegre")?;
//!
//! let current = client.get_current(&city).await?;
//! let samples = client.get_forecast(&city).await?;
//! ```

pub mod client;
mod config;
mod error;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient};
pub use config::WeatherConfig;
pub use error::WeatherError;
pub use models::{
    ConditionEntry, CurrentMeasurements, CurrentResponse, ForecastEntry, ForecastResponse,
    SampleMeasurements, Wind,
};
