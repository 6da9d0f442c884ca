//! Route definitions

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tracing::info;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// When `assets.dir` is configured and `assets.base_url` is a local path,
/// the directory is served under that path.
pub fn create_router(state: AppState) -> Router {
    let assets = state.config.assets.clone();

    let router = Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Weather API (v1)
        .route("/v1/weather", get(handlers::weather::get_weather))
        // Weather page
        .route("/", get(handlers::page::weather_page));

    let router = match assets.dir {
        Some(dir) if assets.base_url.starts_with('/') && assets.base_url != "/" => {
            info!(dir = %dir, path = %assets.base_url, "Serving condition assets");
            router.nest_service(assets.base_url.trim_end_matches('/'), ServeDir::new(dir))
        },
        _ => router,
    };

    router.with_state(state)
}
