//! Forecast aggregation
//!
//! Groups the provider's flat list of 3-hour samples into per-day
//! summaries. Dates keep the order in which they first appear, the mean
//! temperature covers every sample of the day, and the representative
//! condition is the one of the day's first sample.
//!
//! ```
//! use chrono::NaiveDate;
//! use domain::{ForecastSample, aggregate};
//!
//! let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let samples = vec![
//!     ForecastSample::new(day.and_hms_opt(0, 0, 0).unwrap(), 20.0, "Clear"),
//!     ForecastSample::new(day.and_hms_opt(3, 0, 0).unwrap(), 24.0, "Rain"),
//! ];
//!
//! let days = aggregate(&samples);
//! assert_eq!(days.len(), 1);
//! assert!((days[0].temperature - 22.0).abs() < f64::EPSILON);
//! assert_eq!(days[0].condition.as_str(), "Clear");
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::value_objects::ConditionLabel;

/// Maximum number of days kept by [`aggregate`]
pub const MAX_FORECAST_DAYS: usize = 5;

/// One timestamped observation from the provider's multi-day forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Sample time as encoded by the provider
    pub timestamp: NaiveDateTime,
    /// Instantaneous temperature in Celsius
    pub temperature: f64,
    /// Primary condition label
    pub condition: ConditionLabel,
}

impl ForecastSample {
    #[must_use]
    pub fn new(
        timestamp: NaiveDateTime,
        temperature: f64,
        condition: impl Into<ConditionLabel>,
    ) -> Self {
        Self {
            timestamp,
            temperature,
            condition: condition.into(),
        }
    }

    /// Calendar date this sample is grouped under
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Aggregated forecast for a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Arithmetic mean of the day's sample temperatures in Celsius
    pub temperature: f64,
    /// Condition of the day's first sample
    pub condition: ConditionLabel,
}

struct DayAccumulator<'a> {
    date: NaiveDate,
    sum: f64,
    count: u32,
    condition: &'a ConditionLabel,
}

impl DayAccumulator<'_> {
    fn finish(self) -> DaySummary {
        DaySummary {
            date: self.date,
            temperature: self.sum / f64::from(self.count),
            condition: self.condition.clone(),
        }
    }
}

/// Collapse chronological samples into at most [`MAX_FORECAST_DAYS`] day summaries
///
/// Samples are not validated here; malformed provider data must be rejected
/// before it reaches this function. Dates beyond the first five distinct
/// ones are dropped.
#[must_use]
pub fn aggregate(samples: &[ForecastSample]) -> Vec<DaySummary> {
    let mut days: Vec<DayAccumulator<'_>> = Vec::with_capacity(MAX_FORECAST_DAYS);

    for sample in samples {
        let date = sample.date();
        if let Some(day) = days.iter_mut().find(|day| day.date == date) {
            day.sum += sample.temperature;
            day.count += 1;
        } else if days.len() < MAX_FORECAST_DAYS {
            days.push(DayAccumulator {
                date,
                sum: sample.temperature,
                count: 1,
                condition: &sample.condition,
            });
        }
    }

    days.into_iter().map(DayAccumulator::finish).collect()
}
