//! Condition assets adapter - Built-in icon/animation/sound table

use std::collections::HashMap;

use application::ports::{ConditionAssets, ConditionAssetsPort};
use domain::ConditionLabel;
use tracing::debug;

use crate::config::AssetsConfig;

/// `(label, icon, asset stem)`; animation is `{stem}.json`, sound is `{stem}.mp3`
const BUILT_IN: &[(&str, &str, &str)] = &[
    (ConditionLabel::CLEAR, "sun", "clear"),
    (ConditionLabel::CLOUDS, "cloud", "clouds"),
    (ConditionLabel::RAIN, "cloud-rain", "rain"),
    (ConditionLabel::DRIZZLE, "cloud-drizzle", "rain"),
    (ConditionLabel::THUNDERSTORM, "cloud-lightning", "thunderstorm"),
    (ConditionLabel::SNOW, "snowflake", "snow"),
    (ConditionLabel::MIST, "cloud-fog", "mist"),
    (ConditionLabel::FOG, "cloud-fog", "mist"),
];

const FALLBACK_ICON: &str = "cloud-sun";
const FALLBACK_STEM: &str = "default";

/// Table-backed [`ConditionAssetsPort`]
///
/// Labels are matched ignoring case. Anything unknown (Haze, Smoke, Dust,
/// ...) gets the fallback entry.
#[derive(Debug, Clone)]
pub struct StaticConditionAssets {
    table: HashMap<String, ConditionAssets>,
    fallback: ConditionAssets,
}

impl StaticConditionAssets {
    /// Built-in table with asset files under `base_url`
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let table = BUILT_IN
            .iter()
            .map(|(label, icon, stem)| (label.to_lowercase(), entry(base_url, icon, stem)))
            .collect();

        Self {
            table,
            fallback: entry(base_url, FALLBACK_ICON, FALLBACK_STEM),
        }
    }

    /// Built-in table with configured overrides applied
    ///
    /// Override entries are used verbatim; no base URL is prepended.
    #[must_use]
    pub fn from_config(config: &AssetsConfig) -> Self {
        let mut assets = Self::new(&config.base_url);
        for (label, entry) in &config.overrides {
            debug!(label = %label, icon = %entry.icon, "Overriding condition assets");
            assets.table.insert(label.to_lowercase(), entry.clone());
        }
        if let Some(fallback) = &config.fallback {
            assets.fallback = fallback.clone();
        }
        assets
    }

    /// Entry used for unmapped conditions
    #[must_use]
    pub const fn fallback(&self) -> &ConditionAssets {
        &self.fallback
    }
}

impl Default for StaticConditionAssets {
    fn default() -> Self {
        Self::from_config(&AssetsConfig::default())
    }
}

impl ConditionAssetsPort for StaticConditionAssets {
    fn assets_for(&self, condition: &ConditionLabel) -> ConditionAssets {
        self.table
            .get(&condition.as_str().to_lowercase())
            .unwrap_or(&self.fallback)
            .clone()
    }
}

fn entry(base_url: &str, icon: &str, stem: &str) -> ConditionAssets {
    let base = base_url.trim_end_matches('/');
    ConditionAssets {
        icon: icon.to_string(),
        animation: format!("{base}/{stem}.json"),
        sound: format!("{base}/{stem}.mp3"),
    }
}
