//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `weather`: OpenWeatherMap credentials and endpoint
//! - `presentation`: locale and condition assets
//! - `telemetry`: log filter and format
//!
//! Values are layered: built-in defaults, then an optional `config.toml`
//! in the working directory, then `CLIMA_*` environment variables. Nested
//! keys use a double underscore, e.g. `CLIMA_WEATHER__API_KEY` or
//! `CLIMA_SERVER__PORT`.

mod presentation;
mod server;
mod telemetry;
mod weather;

use std::time::Duration;

use application::ApplicationError;
use integration_weather::WeatherConfig;
use serde::Deserialize;
use tracing::debug;

pub use presentation::{AssetsConfig, UiConfig};
pub use server::ServerConfig;
pub use telemetry::TelemetryAppConfig;
pub use weather::WeatherAppConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CLIMA";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,

    /// Condition asset configuration
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_sources(
            config::File::with_name("config").required(false),
            Self::environment(),
        )
    }

    /// Load configuration from an explicit file (required) and the environment
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        Self::from_sources(config::File::with_name(path), Self::environment())
    }

    /// The `CLIMA_*` environment source
    ///
    /// Values stay strings; typed fields are converted on deserialization,
    /// so a digit-only API key keeps its leading zeros.
    #[must_use]
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    /// Build from a file-like source layered under an environment source
    pub fn from_sources<S>(file: S, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?;
        let loaded: Self = config.try_deserialize()?;
        debug!(
            host = %loaded.server.host,
            port = loaded.server.port,
            locale = %loaded.ui.locale,
            api_key_set = loaded.weather.api_key.is_some(),
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Provider language: explicit `weather.lang`, else derived from the locale
    #[must_use]
    pub fn provider_lang(&self) -> String {
        self.weather
            .lang
            .clone()
            .unwrap_or_else(|| self.ui.locale.provider_lang().to_string())
    }

    /// Client configuration for the weather integration
    ///
    /// Fails with [`ApplicationError::Configuration`] when no API key is set.
    pub fn weather_client_config(&self) -> Result<WeatherConfig, ApplicationError> {
        let api_key = self.weather.api_key.clone().ok_or_else(|| {
            ApplicationError::Configuration(format!(
                "weather.api_key is not set (use {ENV_PREFIX}_WEATHER__API_KEY)"
            ))
        })?;

        Ok(WeatherConfig {
            base_url: self.weather.base_url.clone(),
            api_key,
            lang: self.provider_lang(),
            timeout_secs: self.weather.timeout_secs,
        })
    }

    /// Graceful shutdown timeout, if configured
    #[must_use]
    pub fn shutdown_timeout(&self) -> Option<Duration> {
        self.server.shutdown_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use application::Locale;
    use config::{File, FileFormat};
    use secrecy::ExposeSecret;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        AppConfig::environment().source(Some(
            vars.iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        ))
    }

    fn toml(content: &str) -> File<config::FileSourceString, FileFormat> {
        File::from_str(content, FileFormat::Toml)
    }

    #[test]
    fn defaults_without_sources() {
        let config = AppConfig::from_sources(toml(""), env(&[])).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.cors_enabled);
        assert_eq!(config.ui.locale, Locale::PtBr);
        assert!(config.weather.api_key.is_none());
        assert_eq!(config.weather.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.telemetry.log_filter, "info,tower_http=info");
        assert!(!config.telemetry.json);
        assert_eq!(config.assets.base_url, "/assets");
    }

    #[test]
    fn file_values_are_read() {
        let config = AppConfig::from_sources(
            toml(
                r#"
                [server]
                port = 8080

                [ui]
                locale = "en"

                [assets.overrides.Rain]
                icon = "umbrella"
                animation = "storm.json"
                sound = "storm.mp3"
                "#,
            ),
            env(&[]),
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ui.locale, Locale::En);
        let (_, rain) = config
            .assets
            .overrides
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case("rain"))
            .unwrap();
        assert_eq!(rain.icon, "umbrella");
    }

    #[test]
    fn environment_overrides_file() {
        let config = AppConfig::from_sources(
            toml("[server]\nport = 8080\n"),
            env(&[
                ("CLIMA_SERVER__PORT", "9090"),
                ("CLIMA_WEATHER__API_KEY", "env-key"),
                ("CLIMA_TELEMETRY__JSON", "true"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert!(config.telemetry.json);
        assert_eq!(
            config.weather.api_key.as_ref().unwrap().expose_secret(),
            "env-key"
        );
    }

    #[test]
    fn environment_sets_allowed_origins() {
        let config = AppConfig::from_sources(
            toml(""),
            env(&[(
                "CLIMA_SERVER__ALLOWED_ORIGINS",
                "https://a.example, https://b.example",
            )]),
        )
        .unwrap();

        assert_eq!(
            config.server.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );

        let single = AppConfig::from_sources(
            toml(""),
            env(&[("CLIMA_SERVER__ALLOWED_ORIGINS", "https://a.example")]),
        )
        .unwrap();
        assert_eq!(single.server.allowed_origins, vec!["https://a.example"]);
    }

    #[test]
    fn file_allowed_origins_list() {
        let config = AppConfig::from_sources(
            toml("[server]\nallowed_origins = [\"https://a.example\"]\n"),
            env(&[]),
        )
        .unwrap();

        assert_eq!(config.server.allowed_origins, vec!["https://a.example"]);
    }

    #[test]
    fn digit_only_api_key_is_kept_verbatim() {
        for key in ["0123", "12345678901234567890123456789012"] {
            let config = AppConfig::from_sources(
                toml(""),
                env(&[("CLIMA_WEATHER__API_KEY", key)]),
            )
            .unwrap();

            assert_eq!(
                config.weather.api_key.as_ref().unwrap().expose_secret(),
                key
            );
        }
    }

    #[test]
    fn weather_client_config_requires_key() {
        let config = AppConfig::default();
        assert!(matches!(
            config.weather_client_config(),
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[test]
    fn provider_lang_follows_locale() {
        let mut config = AppConfig::from_sources(
            toml("[weather]\napi_key = \"k\"\n[ui]\nlocale = \"en\"\n"),
            env(&[]),
        )
        .unwrap();

        let client = config.weather_client_config().unwrap();
        assert_eq!(client.lang, "en");
        assert_eq!(client.api_key.expose_secret(), "k");

        config.weather.lang = Some("es".to_string());
        assert_eq!(config.provider_lang(), "es");
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = AppConfig::from_sources(
            toml("[weather]\napi_key = \"super-secret\"\n"),
            env(&[]),
        )
        .unwrap();

        assert!(!format!("{config:?}").contains("super-secret"));
    }

    #[test]
    fn shutdown_timeout_defaults_to_thirty_seconds() {
        assert_eq!(
            AppConfig::default().shutdown_timeout(),
            Some(Duration::from_secs(30))
        );
    }
}
