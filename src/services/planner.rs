// SPDX-License-Identifier: MIT

//! Planner facade over the query → route pipeline.
//!
//! Runs extract → estimate → synthesize → assemble. The stages themselves
//! are pure; the facade owns the seedable random generator and the handle
//! to the shared route store, which receives the one side effect (the
//! final append).

use crate::models::{GeneratedRoute, TravelIntent};
use crate::services::{assembler, cost, itinerary, IntentExtractor};
use crate::store::RouteStore;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Destination pool for randomly synthesized queries.
const RANDOM_DESTINATIONS: [&str; 8] = [
    "Tokyo", "Kyoto", "Paris", "Rome", "London", "New York", "Barcelona", "Bali",
];

/// Duration phrase pool for randomly synthesized queries.
const RANDOM_DURATIONS: [&str; 5] = ["a weekend", "3 days", "5 days", "a week", "10 days"];

/// Interest phrase pool for randomly synthesized queries.
const RANDOM_INTERESTS: [&str; 7] = [
    "museums and art",
    "local food",
    "history and ancient ruins",
    "shopping districts",
    "nature and hiking",
    "nightlife",
    "beaches",
];

/// Failures surfaced by the planner facade.
///
/// The pipeline itself never fails; the only caller-visible error is
/// invoking a planner whose upstream integration is switched off.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("Route planner integration is disabled")]
    Disabled,
}

/// The query-intent extraction and itinerary-synthesis engine.
pub struct Planner {
    extractor: IntentExtractor,
    store: RouteStore,
    rng: Mutex<StdRng>,
    enabled: bool,
}

impl Planner {
    /// Create a planner appending to `store`.
    ///
    /// With `seed` set, every random draw (cost variance, leg jitter, route
    /// ids, timestamp offsets, random queries) is reproducible.
    pub fn new(store: RouteStore, enabled: bool, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            extractor: IntentExtractor::new(),
            store,
            rng: Mutex::new(rng),
            enabled,
        }
    }

    /// Parse a raw query into a structured intent. Pure, no side effects.
    pub fn analyze_query(&self, query: &str) -> Result<TravelIntent, PlannerError> {
        self.ensure_enabled()?;
        Ok(self.extractor.extract(query))
    }

    /// Run the full pipeline for a query and append the route to the store.
    pub fn generate_route(&self, query: &str) -> Result<GeneratedRoute, PlannerError> {
        self.ensure_enabled()?;

        let intent = self.extractor.extract(query);
        let mut rng = self.rng.lock().expect("planner rng lock poisoned");

        // Cost estimation and itinerary synthesis are independent: both
        // consume the intent, neither sees the other's output.
        let cost = cost::estimate(&intent.destination, intent.days, &mut *rng);
        let timeline = itinerary::synthesize(&intent.destination, intent.days, &mut *rng);
        let route = assembler::assemble(&intent, cost, &self.store, &mut *rng);

        Ok(GeneratedRoute { route, timeline })
    }

    /// Synthesize a query from the fixed pools, then delegate to
    /// [`Planner::generate_route`].
    pub fn generate_random_route(&self) -> Result<GeneratedRoute, PlannerError> {
        self.ensure_enabled()?;

        let query = {
            let mut rng = self.rng.lock().expect("planner rng lock poisoned");
            random_query(&mut *rng)
        };
        tracing::debug!(query = %query, "Synthesized random query");
        self.generate_route(&query)
    }

    pub fn store(&self) -> &RouteStore {
        &self.store
    }

    fn ensure_enabled(&self) -> Result<(), PlannerError> {
        if self.enabled {
            Ok(())
        } else {
            Err(PlannerError::Disabled)
        }
    }
}

/// Combine one entry from each pool into a plausible travel query.
fn random_query(rng: &mut impl Rng) -> String {
    let destination = RANDOM_DESTINATIONS.choose(rng).expect("non-empty pool");
    let duration = RANDOM_DURATIONS.choose(rng).expect("non-empty pool");
    let interest = RANDOM_INTERESTS.choose(rng).expect("non-empty pool");
    format!("I want to visit {destination} for {duration}, focusing on {interest}.")
}
