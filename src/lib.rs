// SPDX-License-Identifier: MIT

//! Tripweaver: synthesize travel routes from free-text queries
//!
//! This crate provides the backend API that turns a travel request like
//! "a week in Tokyo" into a structured intent and a day-by-day itinerary,
//! using fixed ordered rule tables rather than any NLP.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::Planner;
use store::RouteStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: RouteStore,
    pub planner: Planner,
}
