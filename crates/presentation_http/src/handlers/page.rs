//! Server-rendered weather page

use application::QueryError;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use infrastructure::templates::{PageError, WeatherPage};
use tracing::instrument;

use super::CityQuery;
use crate::{error::ApiError, state::AppState};

/// `GET /` renders the search form; `GET /?city=` also runs the query
///
/// Query failures render the page with an error banner and no weather, using
/// the same status codes as the JSON API.
#[instrument(skip(state))]
pub async fn weather_page(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<(StatusCode, Html<String>), ApiError> {
    let locale = state.locale();
    let mut page = WeatherPage::empty(locale);
    let mut status = StatusCode::OK;

    if let Some(city) = query.city {
        match state.weather.query(&city).await {
            Ok(snapshot) => {
                page.view = Some(state.presenter.present(&snapshot));
            },
            Err(err) => {
                status = status_for(&err);
                page.error = Some(PageError::from_query_error(&err, locale));
            },
        }
        page.city = city;
    }

    let html = state.templates.render_weather_page(&page)?;
    Ok((status, Html(html)))
}

const fn status_for(err: &QueryError) -> StatusCode {
    match err {
        QueryError::Validation { .. } => StatusCode::BAD_REQUEST,
        QueryError::NotFound { .. } => StatusCode::NOT_FOUND,
        QueryError::Transient { .. } => StatusCode::BAD_GATEWAY,
    }
}
