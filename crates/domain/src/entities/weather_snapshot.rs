//! Weather snapshot - the unit replaced atomically on every successful query

use serde::{Deserialize, Serialize};

use super::CurrentWeather;
use crate::forecast::DaySummary;

/// Current conditions plus the aggregated daily forecast for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentWeather,
    pub forecast: Vec<DaySummary>,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn new(current: CurrentWeather, forecast: Vec<DaySummary>) -> Self {
        Self { current, forecast }
    }
}
