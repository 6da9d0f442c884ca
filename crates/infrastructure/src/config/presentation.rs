//! User interface and asset configuration.

use std::collections::HashMap;

use application::{ConditionAssets, Locale};
use serde::Deserialize;

/// User interface settings shared by the web page and the terminal
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Message language (`pt_br` or `en`)
    #[serde(default)]
    pub locale: Locale,
}

/// Condition asset settings
///
/// `overrides` is keyed by provider condition label (matched ignoring
/// case), e.g.
///
/// ```toml
/// [assets.overrides.Rain]
/// icon = "umbrella"
/// animation = "storm.json"
/// sound = "heavy-rain.mp3"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// URL prefix prepended to animation and sound file names
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Local directory served under `base_url` by the HTTP server
    #[serde(default)]
    pub dir: Option<String>,

    /// Entry used for conditions without a mapping
    #[serde(default)]
    pub fallback: Option<ConditionAssets>,

    /// Per-condition replacements for the built-in table
    #[serde(default)]
    pub overrides: HashMap<String, ConditionAssets>,
}

fn default_base_url() -> String {
    "/assets".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            dir: None,
            fallback: None,
            overrides: HashMap::new(),
        }
    }
}
