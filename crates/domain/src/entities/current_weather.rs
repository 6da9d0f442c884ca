//! Current weather reading for a single location

use serde::{Deserialize, Serialize};

use crate::value_objects::{ConditionLabel, Humidity};

/// Meters per second to kilometers per hour
const MS_TO_KMH: f64 = 3.6;

/// Current conditions reported by the provider for a queried city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Location name as resolved by the provider
    pub location: String,
    /// Primary condition label (e.g. "Clear")
    pub condition: ConditionLabel,
    /// Localized textual description (e.g. "céu limpo")
    pub description: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in meters per second
    pub wind_speed: f64,
}

impl CurrentWeather {
    /// Wind speed converted to km/h
    #[must_use]
    pub fn wind_speed_kmh(&self) -> f64 {
        self.wind_speed * MS_TO_KMH
    }
}
