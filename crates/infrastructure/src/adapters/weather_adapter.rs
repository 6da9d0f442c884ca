//! Weather adapter - Implements WeatherPort using integration_weather

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{CityName, CurrentWeather, ForecastSample};
use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap provider
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"WeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter backed by [`OpenWeatherMapClient`]
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenWeatherMapClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over any [`WeatherClient`]
    #[must_use]
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::CityNotFound(city) => ApplicationError::NotFound(city),
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) | WeatherError::InvalidResponse(e) => {
                ApplicationError::Internal(e)
            },
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn current_weather(&self, city: &CityName) -> Result<CurrentWeather, ApplicationError> {
        let result = self.client.get_current(city).await;

        match &result {
            Ok(current) => {
                debug!(
                    location = %current.location,
                    temperature = current.temperature,
                    condition = %current.condition,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.map_err(Self::map_error)
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn forecast_samples(
        &self,
        city: &CityName,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        let result = self.client.get_forecast(city).await;

        match &result {
            Ok(samples) => {
                debug!(samples = samples.len(), "Retrieved weather forecast");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
