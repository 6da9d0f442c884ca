//! Weather query use case
//!
//! Validates the city, fetches current conditions and then the forecast,
//! and aggregates the forecast into day summaries. Stateless, so the HTTP
//! proxy and the interactive controller share it.

use std::sync::Arc;

use domain::{CityName, WeatherSnapshot, aggregate};
use tracing::{debug, info, instrument, warn};

use crate::error::QueryError;
use crate::ports::WeatherPort;

/// Use case for looking up the weather of a city
pub struct WeatherQueryService {
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherQueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherQueryService")
            .field("weather", &"<WeatherPort>")
            .finish()
    }
}

impl WeatherQueryService {
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Validate raw input and fetch its weather
    ///
    /// Empty input fails with [`QueryError::Validation`] before any provider
    /// call is made.
    pub async fn query(&self, raw_city: &str) -> Result<WeatherSnapshot, QueryError> {
        let city = CityName::parse(raw_city).map_err(|e| {
            debug!(error = %e, "Rejected city input");
            QueryError::from(e)
        })?;
        self.fetch(&city).await
    }

    /// Fetch current weather and forecast for an already validated city
    #[instrument(skip(self), fields(city = %city))]
    pub async fn fetch(&self, city: &CityName) -> Result<WeatherSnapshot, QueryError> {
        let current = self
            .weather
            .current_weather(city)
            .await
            .map_err(|e| Self::classify(e, city))?;

        let samples = self
            .weather
            .forecast_samples(city)
            .await
            .map_err(|e| Self::classify(e, city))?;

        let forecast = aggregate(&samples);
        info!(
            location = %current.location,
            samples = samples.len(),
            days = forecast.len(),
            "Weather query completed"
        );

        Ok(WeatherSnapshot::new(current, forecast))
    }

    /// Check whether the provider is reachable
    pub async fn is_available(&self) -> bool {
        self.weather.is_available().await
    }

    fn classify(err: crate::error::ApplicationError, city: &CityName) -> QueryError {
        let classified = QueryError::from_application(err, city);
        match &classified {
            QueryError::NotFound { .. } => debug!(city = %city, "City not found"),
            other => warn!(city = %city, error = %other, "Weather query failed"),
        }
        classified
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain::{ConditionLabel, CurrentWeather, ForecastSample, Humidity};

    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::MockWeatherPort;

    fn current() -> CurrentWeather {
        CurrentWeather {
            location: "Florianópolis".to_string(),
            condition: ConditionLabel::from("Clear"),
            description: "céu limpo".to_string(),
            temperature: 23.4,
            humidity: Humidity::new(70).unwrap(),
            wind_speed: 2.5,
        }
    }

    fn samples() -> Vec<ForecastSample> {
        let day1 = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        vec![
            ForecastSample::new(day1.and_hms_opt(0, 0, 0).unwrap(), 20.0, "Clear"),
            ForecastSample::new(day1.and_hms_opt(3, 0, 0).unwrap(), 24.0, "Clear"),
            ForecastSample::new(day2.and_hms_opt(0, 0, 0).unwrap(), 15.0, "Rain"),
        ]
    }

    #[tokio::test]
    async fn empty_city_never_calls_provider() {
        let mut port = MockWeatherPort::new();
        port.expect_current_weather().never();
        port.expect_forecast_samples().never();

        let service = WeatherQueryService::new(Arc::new(port));
        let result = service.query("   ").await;

        assert!(matches!(result, Err(QueryError::Validation { .. })));
    }

    #[tokio::test]
    async fn successful_query_aggregates_forecast() {
        let mut port = MockWeatherPort::new();
        port.expect_current_weather()
            .times(1)
            .returning(|_| Ok(current()));
        port.expect_forecast_samples()
            .times(1)
            .returning(|_| Ok(samples()));

        let service = WeatherQueryService::new(Arc::new(port));
        let snapshot = service.query(" Florianópolis ").await.unwrap();

        assert_eq!(snapshot.current.location, "Florianópolis");
        assert_eq!(snapshot.forecast.len(), 2);
        assert!((snapshot.forecast[0].temperature - 22.0).abs() < 1e-9);
        assert_eq!(snapshot.forecast[1].condition.as_str(), "Rain");
    }

    #[tokio::test]
    async fn passes_trimmed_city_to_provider() {
        let mut port = MockWeatherPort::new();
        port.expect_current_weather()
            .withf(|city| city.as_str() == "Belo Horizonte")
            .returning(|_| Ok(current()));
        port.expect_forecast_samples()
            .withf(|city| city.as_str() == "Belo Horizonte")
            .returning(|_| Ok(Vec::new()));

        let service = WeatherQueryService::new(Arc::new(port));
        let snapshot = service.query("\tBelo Horizonte ").await.unwrap();

        assert!(snapshot.forecast.is_empty());
    }

    #[tokio::test]
    async fn not_found_on_current_skips_forecast() {
        let mut port = MockWeatherPort::new();
        port.expect_current_weather()
            .returning(|_| Err(ApplicationError::NotFound("city".into())));
        port.expect_forecast_samples().never();

        let service = WeatherQueryService::new(Arc::new(port));
        let result = service.query("Atlantis").await;

        assert_eq!(
            result,
            Err(QueryError::NotFound {
                city: "Atlantis".to_string()
            })
        );
    }

    #[tokio::test]
    async fn forecast_failure_is_transient() {
        let mut port = MockWeatherPort::new();
        port.expect_current_weather().returning(|_| Ok(current()));
        port.expect_forecast_samples()
            .returning(|_| Err(ApplicationError::ExternalService("timeout".into())));

        let service = WeatherQueryService::new(Arc::new(port));
        let result = service.query("Recife").await;

        assert!(matches!(result, Err(QueryError::Transient { .. })));
    }

    #[tokio::test]
    async fn availability_delegates_to_port() {
        let mut port = MockWeatherPort::new();
        port.expect_is_available().returning(|| false);

        let service = WeatherQueryService::new(Arc::new(port));
        assert!(!service.is_available().await);
    }
}
