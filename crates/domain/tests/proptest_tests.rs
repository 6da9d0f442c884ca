//! Property-based tests for the forecast aggregator and value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use domain::{CityName, ForecastSample, MAX_FORECAST_DAYS, aggregate};
use proptest::prelude::*;

const CONDITIONS: [&str; 5] = ["Clear", "Clouds", "Rain", "Snow", "Drizzle"];

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Chronological 3-hour samples, like the provider's forecast list
fn chronological_samples() -> impl Strategy<Value = Vec<ForecastSample>> {
    prop::collection::vec((-40.0f64..50.0, 0usize..CONDITIONS.len()), 0..60).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (temp, cond))| {
                let offset = Duration::hours(3 * i64::try_from(i).unwrap_or_default());
                ForecastSample::new(base_time() + offset, temp, CONDITIONS[cond])
            })
            .collect()
    })
}

/// Samples in arbitrary order spread over up to ten days
fn shuffled_samples() -> impl Strategy<Value = Vec<ForecastSample>> {
    prop::collection::vec(
        (0i64..10, 0i64..8, -40.0f64..50.0, 0usize..CONDITIONS.len()),
        0..60,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(day, slot, temp, cond)| {
                let ts = base_time() + Duration::days(day) + Duration::hours(slot * 3);
                ForecastSample::new(ts, temp, CONDITIONS[cond])
            })
            .collect()
    })
}

mod aggregate_tests {
    use super::*;

    proptest! {
        #[test]
        fn never_more_than_five_days(samples in shuffled_samples()) {
            prop_assert!(aggregate(&samples).len() <= MAX_FORECAST_DAYS);
        }

        #[test]
        fn dates_are_unique(samples in shuffled_samples()) {
            let days = aggregate(&samples);
            let unique: HashSet<_> = days.iter().map(|d| d.date).collect();
            prop_assert_eq!(unique.len(), days.len());
        }

        #[test]
        fn dates_follow_first_appearance(samples in shuffled_samples()) {
            let mut expected = Vec::new();
            for s in &samples {
                if !expected.contains(&s.date()) {
                    expected.push(s.date());
                }
            }
            expected.truncate(MAX_FORECAST_DAYS);

            let actual: Vec<_> = aggregate(&samples).iter().map(|d| d.date).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn condition_comes_from_first_sample_of_day(samples in shuffled_samples()) {
            for day in aggregate(&samples) {
                let first = samples.iter().find(|s| s.date() == day.date);
                prop_assert_eq!(first.map(|s| &s.condition), Some(&day.condition));
            }
        }

        #[test]
        fn temperature_is_mean_of_day(samples in shuffled_samples()) {
            for day in aggregate(&samples) {
                let temps: Vec<f64> = samples
                    .iter()
                    .filter(|s| s.date() == day.date)
                    .map(|s| s.temperature)
                    .collect();
                #[allow(clippy::cast_precision_loss)]
                let mean = temps.iter().sum::<f64>() / temps.len() as f64;
                prop_assert!((day.temperature - mean).abs() < 1e-9);
            }
        }

        #[test]
        fn mean_lies_within_day_range(samples in chronological_samples()) {
            for day in aggregate(&samples) {
                let temps = samples.iter().filter(|s| s.date() == day.date).map(|s| s.temperature);
                let (min, max) = temps.fold((f64::MAX, f64::MIN), |(lo, hi), t| (lo.min(t), hi.max(t)));
                prop_assert!(day.temperature >= min - 1e-9 && day.temperature <= max + 1e-9);
            }
        }

        #[test]
        fn chronological_days_are_consecutive(samples in chronological_samples()) {
            let days = aggregate(&samples);
            for pair in days.windows(2) {
                prop_assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
            }
        }

        #[test]
        fn deterministic(samples in shuffled_samples()) {
            prop_assert_eq!(aggregate(&samples), aggregate(&samples));
        }
    }
}

mod city_name_tests {
    use super::*;

    proptest! {
        #[test]
        fn whitespace_only_is_rejected(raw in "[ \t\n]{0,10}") {
            prop_assert!(CityName::parse(&raw).is_err());
        }

        #[test]
        fn parsed_names_are_trimmed(name in "[A-Za-z][A-Za-z ]{0,30}[A-Za-z]", pad in " {0,3}") {
            let raw = format!("{pad}{name}{pad}");
            let city = CityName::parse(&raw);
            prop_assert!(city.is_ok());
            if let Ok(city) = city {
                prop_assert_eq!(city.as_str(), name.as_str());
            }
        }
    }
}
