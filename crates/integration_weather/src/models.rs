//! OpenWeatherMap response models
//!
//! Raw provider payloads and their conversion into domain types. Conversion
//! is where malformed data is rejected, so the domain never sees a sample
//! without a timestamp or condition.

use chrono::NaiveDateTime;
use domain::{ConditionLabel, CurrentWeather, ForecastSample, Humidity};
use serde::Deserialize;

use crate::error::WeatherError;

/// Provider sentinel for an unknown location
const NOT_FOUND_CODE: &str = "404";

/// Minimal envelope present on every provider response, including errors
///
/// `cod` is a string on errors and forecast responses but a number on current
/// weather responses, so it is kept as a raw JSON value.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct StatusEnvelope {
    #[serde(default)]
    pub cod: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl StatusEnvelope {
    /// Parse the envelope leniently; undecodable bodies yield an empty one
    pub(crate) fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub(crate) fn is_not_found(&self) -> bool {
        match &self.cod {
            Some(serde_json::Value::String(code)) => code == NOT_FOUND_CODE,
            Some(serde_json::Value::Number(code)) => code.as_u64() == Some(404),
            _ => false,
        }
    }

    pub(crate) fn message(&self) -> Option<String> {
        match &self.message {
            Some(serde_json::Value::String(msg)) => Some(msg.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        }
    }
}

/// One entry of the provider's `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionEntry {
    /// Primary group ("Clear", "Rain", ...)
    pub main: String,
    /// Localized description
    #[serde(default)]
    pub description: String,
}

/// `main` block of a current-weather response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentMeasurements {
    pub temp: f64,
    pub humidity: u8,
}

/// `wind` block of a current-weather response
#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s (metric units)
    pub speed: f64,
}

/// Raw `/weather` response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub name: String,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    pub main: CurrentMeasurements,
    pub wind: Wind,
}

/// `main` block of a forecast entry
#[derive(Debug, Clone, Deserialize)]
pub struct SampleMeasurements {
    pub temp: f64,
}

/// One 3-hour entry of the `/forecast` list
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Combined date and time, e.g. `2025-06-01 03:00:00`
    pub dt_txt: String,
    pub main: SampleMeasurements,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
}

/// Raw `/forecast` response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

impl TryFrom<CurrentResponse> for CurrentWeather {
    type Error = WeatherError;

    fn try_from(raw: CurrentResponse) -> Result<Self, Self::Error> {
        let primary = raw.weather.into_iter().next().ok_or_else(|| {
            WeatherError::InvalidResponse("current weather has no condition entry".to_string())
        })?;
        let humidity = Humidity::new(raw.main.humidity)
            .map_err(|e| WeatherError::InvalidResponse(e.to_string()))?;

        Ok(Self {
            location: raw.name,
            condition: ConditionLabel::new(primary.main),
            description: primary.description,
            temperature: raw.main.temp,
            humidity,
            wind_speed: raw.wind.speed,
        })
    }
}

impl TryFrom<ForecastEntry> for ForecastSample {
    type Error = WeatherError;

    fn try_from(raw: ForecastEntry) -> Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&raw.dt_txt)?;
        let primary = raw.weather.into_iter().next().ok_or_else(|| {
            WeatherError::InvalidResponse(format!(
                "forecast entry {} has no condition entry",
                raw.dt_txt
            ))
        })?;

        Ok(Self::new(timestamp, raw.main.temp, primary.main))
    }
}

impl ForecastResponse {
    /// Convert every entry, failing on the first malformed one
    pub fn into_samples(self) -> Result<Vec<ForecastSample>, WeatherError> {
        self.list.into_iter().map(ForecastSample::try_from).collect()
    }
}

/// Parse the provider's `dt_txt`
///
/// The provider uses a space separator; ISO 8601 `T` is accepted as well.
fn parse_timestamp(s: &str) -> Result<NaiveDateTime, WeatherError> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| WeatherError::InvalidResponse(format!("Invalid datetime format: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_json() -> serde_json::Value {
        serde_json::json!({
            "coord": {"lon": -46.6361, "lat": -23.5475},
            "weather": [{"id": 800, "main": "Clear", "description": "céu limpo", "icon": "01d"}],
            "main": {"temp": 24.6, "feels_like": 24.9, "humidity": 61, "pressure": 1016},
            "wind": {"speed": 3.6, "deg": 140},
            "name": "São Paulo",
            "cod": 200
        })
    }

    #[test]
    fn envelope_detects_string_404() {
        let env = StatusEnvelope::from_body(r#"{"cod":"404","message":"city not found"}"#);
        assert!(env.is_not_found());
        assert_eq!(env.message().as_deref(), Some("city not found"));
    }

    #[test]
    fn envelope_detects_numeric_404() {
        assert!(StatusEnvelope::from_body(r#"{"cod":404}"#).is_not_found());
    }

    #[test]
    fn envelope_ignores_other_codes() {
        assert!(!StatusEnvelope::from_body(r#"{"cod":200}"#).is_not_found());
        assert!(!StatusEnvelope::from_body(r#"{"cod":"200"}"#).is_not_found());
        assert!(!StatusEnvelope::from_body(r#"{"cod":"401"}"#).is_not_found());
        assert!(!StatusEnvelope::from_body("not json").is_not_found());
    }

    #[test]
    fn current_response_converts() {
        let raw: CurrentResponse = serde_json::from_value(current_json()).unwrap();
        let weather = CurrentWeather::try_from(raw).unwrap();

        assert_eq!(weather.location, "São Paulo");
        assert_eq!(weather.condition.as_str(), "Clear");
        assert_eq!(weather.description, "céu limpo");
        assert!((weather.temperature - 24.6).abs() < 1e-9);
        assert_eq!(weather.humidity.value(), 61);
        assert!((weather.wind_speed - 3.6).abs() < 1e-9);
    }

    #[test]
    fn current_response_without_conditions_is_rejected() {
        let mut json = current_json();
        json["weather"] = serde_json::json!([]);
        let raw: CurrentResponse = serde_json::from_value(json).unwrap();

        assert!(matches!(
            CurrentWeather::try_from(raw),
            Err(WeatherError::InvalidResponse(_))
        ));
    }

    #[test]
    fn current_response_with_bad_humidity_is_rejected() {
        let mut json = current_json();
        json["main"]["humidity"] = serde_json::json!(140);
        let raw: CurrentResponse = serde_json::from_value(json).unwrap();

        assert!(CurrentWeather::try_from(raw).is_err());
    }

    #[test]
    fn forecast_entry_converts() {
        let entry: ForecastEntry = serde_json::from_value(serde_json::json!({
            "dt": 1_748_736_000,
            "main": {"temp": 18.25, "humidity": 70},
            "weather": [{"main": "Rain", "description": "chuva leve"}],
            "dt_txt": "2025-06-01 03:00:00"
        }))
        .unwrap();

        let sample = ForecastSample::try_from(entry).unwrap();
        assert_eq!(sample.timestamp.to_string(), "2025-06-01 03:00:00");
        assert_eq!(sample.condition.as_str(), "Rain");
        assert!((sample.temperature - 18.25).abs() < 1e-9);
    }

    #[test]
    fn forecast_entry_with_bad_timestamp_is_rejected() {
        let entry = ForecastEntry {
            dt_txt: "tomorrow".to_string(),
            main: SampleMeasurements { temp: 1.0 },
            weather: vec![ConditionEntry {
                main: "Snow".to_string(),
                description: String::new(),
            }],
        };

        assert!(matches!(
            ForecastSample::try_from(entry),
            Err(WeatherError::InvalidResponse(_))
        ));
    }

    #[test]
    fn forecast_entry_without_conditions_is_rejected() {
        let entry = ForecastEntry {
            dt_txt: "2025-06-01 00:00:00".to_string(),
            main: SampleMeasurements { temp: 1.0 },
            weather: Vec::new(),
        };

        assert!(ForecastSample::try_from(entry).is_err());
    }

    #[test]
    fn parse_timestamp_accepts_iso_separator() {
        let ts = parse_timestamp("2025-06-01T00:00").unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M").to_string(), "2025-06-01 00:00");
    }
}
