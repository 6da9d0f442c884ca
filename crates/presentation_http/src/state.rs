//! Application state shared across handlers

use std::sync::Arc;

use application::ports::{ConditionAssetsPort, WeatherPort};
use application::{Locale, WeatherPresenter, WeatherQueryService};
use infrastructure::{AppConfig, TemplateEngine, TemplateError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Weather query use case
    pub weather: Arc<WeatherQueryService>,
    /// Snapshot to card conversion
    pub presenter: Arc<WeatherPresenter>,
    /// Page templates
    pub templates: Arc<TemplateEngine>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("locale", &self.locale())
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wire the use case, presenter and templates around the given ports
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        assets: Arc<dyn ConditionAssetsPort>,
        config: AppConfig,
    ) -> Result<Self, TemplateError> {
        let locale = config.ui.locale;
        Ok(Self {
            weather: Arc::new(WeatherQueryService::new(weather)),
            presenter: Arc::new(WeatherPresenter::new(assets, locale)),
            templates: Arc::new(TemplateEngine::new()?),
            config: Arc::new(config),
        })
    }

    /// Locale used for messages and weekday labels
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.config.ui.locale
    }
}
