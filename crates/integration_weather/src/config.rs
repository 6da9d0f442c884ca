//! Weather client configuration

use secrecy::SecretString;
use serde::Deserialize;

/// OpenWeatherMap client configuration
///
/// The API key is held as a [`SecretString`] so it never shows up in logs or
/// `Debug` output.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Provider API key (`appid`)
    pub api_key: SecretString,

    /// Response language for condition descriptions (default: `pt_br`)
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_lang() -> String {
    "pt_br".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl WeatherConfig {
    /// Configuration with defaults and the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: SecretString::from(api_key.into()),
            lang: default_lang(),
            timeout_secs: default_timeout(),
        }
    }
}
