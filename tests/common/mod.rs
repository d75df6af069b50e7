// SPDX-License-Identifier: MIT

use std::sync::Arc;
use tripweaver::config::Config;
use tripweaver::routes::create_router;
use tripweaver::services::Planner;
use tripweaver::store::RouteStore;
use tripweaver::AppState;

/// Create a test app with a seeded planner and empty store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_config(Config::test_default())
}

#[allow(dead_code)]
pub fn create_test_app_with_config(config: Config) -> (axum::Router, Arc<AppState>) {
    let store = RouteStore::new();
    let planner = Planner::new(store.clone(), config.planner_enabled, config.rng_seed);

    let state = Arc::new(AppState {
        config,
        store,
        planner,
    });

    (create_router(state.clone()), state)
}

/// Seeded planner over a fresh store, for tests that skip the HTTP layer.
#[allow(dead_code)]
pub fn create_test_planner() -> Planner {
    Planner::new(RouteStore::new(), true, Some(42))
}
