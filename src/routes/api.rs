// SPDX-License-Identifier: MIT

//! API routes for query analysis and route generation.

use crate::error::{AppError, Result};
use crate::models::{GeneratedRoute, Route, TravelIntent};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

/// Queries longer than this are rejected before reaching the extractor.
const MAX_QUERY_LENGTH: u64 = 1000;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/query/analyze", post(analyze_query))
        .route("/api/routes/generate", post(generate_route))
        .route("/api/routes/random", post(generate_random_route))
        .route("/api/routes", get(list_routes))
        .route("/api/routes/{id}", get(get_route))
}

/// Body for analyze/generate. An empty query is legal (the extractor
/// applies defaults); only over-long input is rejected.
#[derive(Debug, Deserialize, Validate)]
pub struct QueryRequest {
    #[validate(length(max = MAX_QUERY_LENGTH, message = "query too long"))]
    pub query: String,
}

/// Parse a travel query into a structured intent. Pure, nothing stored.
async fn analyze_query(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<TravelIntent>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    simulate_remote_latency(&state).await;

    let intent = state.planner.analyze_query(&payload.query)?;
    Ok(Json(intent))
}

/// Generate a route (with timeline) from a travel query and store it.
async fn generate_route(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<GeneratedRoute>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    simulate_remote_latency(&state).await;

    tracing::info!(query_len = payload.query.len(), "Generating route");
    let generated = state.planner.generate_route(&payload.query)?;
    Ok(Json(generated))
}

/// Generate a route from a randomly synthesized query.
async fn generate_random_route(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GeneratedRoute>> {
    simulate_remote_latency(&state).await;

    let generated = state.planner.generate_random_route()?;
    Ok(Json(generated))
}

#[derive(Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<Route>,
    pub total: u32,
}

/// List all stored routes, most recent first.
///
/// The store itself gives no ordering guarantee across concurrent
/// submissions; the listing sorts by created_date for display.
async fn list_routes(State(state): State<Arc<AppState>>) -> Result<Json<RoutesResponse>> {
    let mut routes = state.store.all();
    routes.sort_by(|a, b| b.created_date.cmp(&a.created_date));

    let total = routes.len() as u32;
    Ok(Json(RoutesResponse { routes, total }))
}

/// Fetch a single stored route by id.
async fn get_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Route>> {
    state
        .store
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Route {id} not found")))
}

/// The engine is synchronous; the service boundary emulates a remote
/// planning backend by adding configurable latency (off in tests).
async fn simulate_remote_latency(state: &AppState) {
    let ms = state.config.simulated_latency_ms;
    if ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}
