// SPDX-License-Identifier: MIT

//! In-memory route repository.
//!
//! The engine's one side effect is appending generated routes here. The
//! store is append-only from the pipeline's point of view; unrelated flows
//! may update routes later, but that happens outside this crate.

use crate::models::Route;
use dashmap::DashMap;
use std::sync::Arc;

/// Shared, concurrent route collection.
///
/// Concurrent appends are safe; iteration order is unspecified, so there is
/// no ordering guarantee across concurrent submissions. Cloning is cheap
/// and shares the underlying map.
#[derive(Default, Clone)]
pub struct RouteStore {
    routes: Arc<DashMap<String, Route>>,
}

impl RouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. A duplicate id (possible with the 4-digit suffix
    /// scheme) silently replaces the earlier entry.
    pub fn append(&self, route: Route) {
        tracing::debug!(route_id = %route.id, location = %route.location, "Storing route");
        self.routes.insert(route.id.clone(), route);
    }

    /// Snapshot of all stored routes, in unspecified order.
    pub fn all(&self) -> Vec<Route> {
        self.routes.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<Route> {
        self.routes.get(id).map(|entry| entry.clone())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
