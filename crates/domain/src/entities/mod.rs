//! Entities - Weather readings assembled from provider responses

mod current_weather;
mod weather_snapshot;

pub use current_weather::CurrentWeather;
pub use weather_snapshot::WeatherSnapshot;
