//! Weather provider configuration.

use secrecy::SecretString;
use serde::Deserialize;

/// OpenWeatherMap settings
///
/// The API key has no default. It is expected from `config.toml` or, more
/// commonly, `CLIMA_WEATHER__API_KEY`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherAppConfig {
    /// Provider API key (`appid`)
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Provider response language; follows `ui.locale` when unset
    #[serde(default)]
    pub lang: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            lang: None,
            timeout_secs: default_timeout(),
        }
    }
}
