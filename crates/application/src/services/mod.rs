//! Application services - Use case implementations

mod ambience;
mod presenter;
mod query_controller;
mod weather_query_service;

pub use ambience::AmbienceService;
pub use presenter::{CurrentCard, ForecastCard, WeatherPresenter, WeatherView, round_half_up};
pub use query_controller::{QueryController, QueryState, SubmitOutcome};
pub use weather_query_service::WeatherQueryService;
