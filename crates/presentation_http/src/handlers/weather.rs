//! Weather API handler

use application::WeatherView;
use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use super::CityQuery;
use crate::{error::ApiError, state::AppState};

/// `GET /v1/weather?city=` - current conditions and up to five forecast days
///
/// A missing `city` parameter is treated like a blank one.
#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<WeatherView>, ApiError> {
    let city = query.city.unwrap_or_default();
    let snapshot = state
        .weather
        .query(&city)
        .await
        .map_err(|e| ApiError::from_query(&e, state.locale()))?;

    Ok(Json(state.presenter.present(&snapshot)))
}
