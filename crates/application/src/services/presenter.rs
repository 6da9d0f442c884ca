//! Weather presenter
//!
//! Turns a [`WeatherSnapshot`] into display cards: rounded numbers,
//! localized labels and the icon/animation/sound resolved for each
//! condition through the injected [`ConditionAssetsPort`].

use std::sync::Arc;

use chrono::NaiveDate;
use domain::WeatherSnapshot;
use serde::{Deserialize, Serialize};

use crate::messages::Locale;
use crate::ports::{ConditionAssets, ConditionAssetsPort};

/// Primary weather card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentCard {
    pub location: String,
    pub condition: String,
    /// Description with every word capitalized
    pub description: String,
    /// Rounded temperature in Celsius
    pub temperature: i64,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Rounded wind speed in km/h
    pub wind_kmh: i64,
    pub assets: ConditionAssets,
}

/// One forecast day card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastCard {
    pub date: NaiveDate,
    /// Abbreviated localized weekday
    pub weekday: String,
    pub condition: String,
    /// Rounded average temperature in Celsius
    pub temperature: i64,
    pub icon: String,
}

/// Everything a UI needs to render a successful query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherView {
    pub current: CurrentCard,
    pub forecast: Vec<ForecastCard>,
}

/// Builds [`WeatherView`]s for a locale
pub struct WeatherPresenter {
    assets: Arc<dyn ConditionAssetsPort>,
    locale: Locale,
}

impl std::fmt::Debug for WeatherPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherPresenter")
            .field("assets", &"<ConditionAssetsPort>")
            .field("locale", &self.locale)
            .finish()
    }
}

impl WeatherPresenter {
    #[must_use]
    pub fn new(assets: Arc<dyn ConditionAssetsPort>, locale: Locale) -> Self {
        Self { assets, locale }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn present(&self, snapshot: &WeatherSnapshot) -> WeatherView {
        let current = &snapshot.current;
        let current_card = CurrentCard {
            location: current.location.clone(),
            condition: current.condition.to_string(),
            description: capitalize_words(&current.description),
            temperature: round_half_up(current.temperature),
            humidity: current.humidity.value(),
            wind_kmh: round_half_up(current.wind_speed_kmh()),
            assets: self.assets.assets_for(&current.condition),
        };

        let forecast = snapshot
            .forecast
            .iter()
            .map(|day| ForecastCard {
                date: day.date,
                weekday: self.locale.weekday(day.date).to_string(),
                condition: day.condition.to_string(),
                temperature: round_half_up(day.temperature),
                icon: self.assets.assets_for(&day.condition).icon,
            })
            .collect();

        WeatherView {
            current: current_card,
            forecast,
        }
    }
}

/// Round to the nearest integer with halves going up (`-2.5 -> -2`, `2.5 -> 3`)
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
