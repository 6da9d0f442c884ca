//! Weather service port
//!
//! Defines the interface for weather data retrieval by city name.

use async_trait::async_trait;
use domain::{CityName, CurrentWeather, ForecastSample};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather provider operations
///
/// Implementations report an unknown city as [`ApplicationError::NotFound`];
/// every other failure uses the remaining variants.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a city
    async fn current_weather(&self, city: &CityName) -> Result<CurrentWeather, ApplicationError>;

    /// Get the provider's chronological 3-hour forecast samples for a city
    async fn forecast_samples(
        &self,
        city: &CityName,
    ) -> Result<Vec<ForecastSample>, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
