//! Template engine for the server-rendered weather page
//!
//! Uses Tera with templates embedded at compile time. HTML templates are
//! auto-escaped, so provider strings (location, description) are safe to
//! interpolate.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{TemplateEngine, WeatherPage};
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_weather_page(&WeatherPage::empty(Locale::PtBr))?;
//! ```

use std::sync::Arc;

use application::{Locale, QueryError, WeatherView};
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

/// Name of the weather page template
pub const WEATHER_PAGE: &str = "weather/page.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }
}

/// Error banner shown on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageError {
    /// `validation`, `not_found` or `transient`
    pub kind: &'static str,
    pub title: String,
    pub message: String,
}

impl PageError {
    #[must_use]
    pub fn from_query_error(error: &QueryError, locale: Locale) -> Self {
        Self {
            kind: error.kind(),
            title: error.title(locale).to_string(),
            message: error.user_message(locale).to_string(),
        }
    }
}

/// Everything the weather page renders
#[derive(Debug, Clone)]
pub struct WeatherPage {
    pub locale: Locale,
    /// Text echoed back into the input
    pub city: String,
    pub view: Option<WeatherView>,
    pub error: Option<PageError>,
}

impl WeatherPage {
    /// Page with an empty search box
    #[must_use]
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            city: String::new(),
            view: None,
            error: None,
        }
    }
}

mod embedded {
    pub const WEATHER_PAGE: &str = include_str!("weather_page.html");
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.list_templates())
            .finish()
    }
}

impl TemplateEngine {
    /// Create an engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_template(WEATHER_PAGE, embedded::WEATHER_PAGE)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render the weather page
    pub fn render_weather_page(&self, page: &WeatherPage) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("lang", page.locale.html_lang());
        ctx.insert("t", page.locale.messages());
        ctx.insert("city", &page.city);
        ctx.insert("view", &page.view);
        ctx.insert("error", &page.error);

        debug!(
            has_view = page.view.is_some(),
            has_error = page.error.is_some(),
            "Rendering weather page"
        );
        self.render(WEATHER_PAGE, &ctx)
    }

    /// Names of all loaded templates
    #[must_use]
    pub fn list_templates(&self) -> Vec<&str> {
        self.tera.get_template_names().collect()
    }
}
