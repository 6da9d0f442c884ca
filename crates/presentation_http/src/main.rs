//! Clima HTTP Server
//!
//! Serves the weather page and JSON API, proxying OpenWeatherMap with a
//! server-side API key.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use infrastructure::{AppConfig, StaticConditionAssets, WeatherAdapter, init_tracing};
use presentation_http::{RequestIdLayer, SecurityHeadersLayer, routes, state::AppState};
use tokio::{net::TcpListener, signal, sync::watch};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.telemetry)?;

    info!("Clima server v{} starting", env!("CARGO_PKG_VERSION"));

    let weather = WeatherAdapter::with_config(config.weather_client_config()?)?;
    let assets = StaticConditionAssets::from_config(&config.assets);
    let cors_layer = cors_layer(&config);
    let security_layer = SecurityHeadersLayer::from_config(&config.server)
        .context("server.content_security_policy is not a valid header value")?;
    let shutdown_timeout = config.shutdown_timeout();
    let addr = config.server.bind_address();

    let state = AppState::new(Arc::new(weather), Arc::new(assets), config)?;

    // Order matters: the last layer added is the outermost
    let app = routes::create_router(state)
        .layer(security_layer)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new());

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    let (stop_tx, mut stop_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = stop_tx.send(true);
    });

    tokio::select! {
        result = server.into_future() => result?,
        () = drain_deadline(&mut stop_rx, shutdown_timeout) => {
            warn!("Connections still open after shutdown timeout, exiting");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves once shutdown was requested and `timeout` has elapsed since
async fn drain_deadline(stop_rx: &mut watch::Receiver<bool>, timeout: Option<Duration>) {
    let Some(timeout) = timeout else {
        return std::future::pending().await;
    };
    if stop_rx.wait_for(|stopping| *stopping).await.is_err() {
        return std::future::pending().await;
    }
    info!("Waiting up to {:?} for connections to close", timeout);
    tokio::time::sleep(timeout).await;
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if !config.server.cors_enabled {
        return CorsLayer::new();
    }

    if config.server.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .server
        .allowed_origins
        .iter()
        .filter_map(|o| {
            o.parse()
                .inspect_err(|e| warn!(origin = %o, error = %e, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
