// SPDX-License-Identifier: MIT

//! Tripweaver API Server
//!
//! Serves the query-intent extraction and itinerary-synthesis engine over
//! HTTP: analyze a travel query, generate a route with a day-by-day
//! timeline, or browse the in-memory route collection.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripweaver::{config::Config, services::Planner, store::RouteStore, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Tripweaver API");

    // Shared in-memory route collection
    let store = RouteStore::new();

    // Planner pipeline; a configured seed makes generation reproducible
    let planner = Planner::new(store.clone(), config.planner_enabled, config.rng_seed);
    tracing::info!(
        enabled = config.planner_enabled,
        seeded = config.rng_seed.is_some(),
        "Planner initialized"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        planner,
    });

    // Build router
    let app = tripweaver::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tripweaver=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
