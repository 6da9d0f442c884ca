//! HTTP request handlers

pub mod health;
pub mod page;
pub mod weather;

use serde::Deserialize;

/// `?city=` query string shared by the API and the page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityQuery {
    #[serde(default)]
    pub city: Option<String>,
}
