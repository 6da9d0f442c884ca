//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap current weather and 5-day forecast
//! endpoints.

use std::time::Duration;

use async_trait::async_trait;
use domain::{CityName, CurrentWeather, ForecastSample};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::models::{CurrentResponse, ForecastResponse, StatusEnvelope};

/// Unit system requested from the provider; the domain works in Celsius and m/s
const UNITS: &str = "metric";

/// City used for the health probe
const HEALTH_CHECK_CITY: &str = "London";

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city
    async fn get_current(&self, city: &CityName) -> Result<CurrentWeather, WeatherError>;

    /// Get the chronological 3-hour forecast samples for a city
    async fn get_forecast(&self, city: &CityName) -> Result<Vec<ForecastSample>, WeatherError>;

    /// Check if the weather service is reachable and accepts our key
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the URL for an endpoint (`weather` or `forecast`)
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Map a transport error, stripping the URL so the key never leaks
    fn map_transport_error(err: reqwest::Error) -> WeatherError {
        let connect = err.is_connect() || err.is_timeout();
        let message = err.without_url().to_string();
        if connect {
            WeatherError::ConnectionFailed(message)
        } else {
            WeatherError::RequestFailed(message)
        }
    }

    /// Classify a response by its body sentinel and HTTP status
    ///
    /// The not-found sentinel wins over the HTTP status because the provider
    /// signals unknown cities in the body.
    fn check_status(city: &CityName, status: StatusCode, body: &str) -> Result<(), WeatherError> {
        let envelope = StatusEnvelope::from_body(body);
        if envelope.is_not_found() {
            return Err(WeatherError::CityNotFound(city.to_string()));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            let detail = envelope
                .message()
                .map_or_else(|| format!("HTTP {status}"), |msg| format!("HTTP {status}: {msg}"));
            return Err(WeatherError::RequestFailed(detail));
        }
        Ok(())
    }

    /// Issue a GET against `endpoint` for `city` and decode the body
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &CityName,
    ) -> Result<T, WeatherError> {
        let url = self.endpoint_url(endpoint);
        debug!(url = %url, city = %city, "Requesting weather provider");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city.as_str()),
                ("appid", self.config.api_key.expose_secret()),
                ("units", UNITS),
                ("lang", self.config.lang.as_str()),
            ])
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(Self::map_transport_error)?;

        if let Err(e) = Self::check_status(city, status, &body) {
            if !e.is_not_found() {
                warn!(status = %status, error = %e, "Weather provider returned an error");
            }
            return Err(e);
        }

        serde_json::from_str(&body).map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self), fields(city = %city))]
    async fn get_current(&self, city: &CityName) -> Result<CurrentWeather, WeatherError> {
        let raw: CurrentResponse = self.fetch("weather", city).await?;
        let current = CurrentWeather::try_from(raw)?;

        debug!(
            location = %current.location,
            condition = %current.condition,
            temperature = current.temperature,
            "Fetched current weather"
        );
        Ok(current)
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn get_forecast(&self, city: &CityName) -> Result<Vec<ForecastSample>, WeatherError> {
        let raw: ForecastResponse = self.fetch("forecast", city).await?;
        let samples = raw.into_samples()?;

        debug!(samples = samples.len(), "Fetched forecast samples");
        Ok(samples)
    }

    async fn is_healthy(&self) -> bool {
        match CityName::parse(HEALTH_CHECK_CITY) {
            Ok(city) => self.get_current(&city).await.is_ok(),
            Err(_) => false,
        }
    }
}
