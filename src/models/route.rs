// SPDX-License-Identifier: MIT

//! Synthesized route records and their day-by-day timeline.
//!
//! Field names on these types are the wire contract the frontend depends
//! on: `Route` serializes in snake_case, while the timeline entries keep
//! the camelCase names (`timeSlot`, `durationMinutes`) of the mock API.

use serde::{Deserialize, Serialize};

/// A synthesized travel route, appended to the shared route store.
///
/// Never mutated after creation by this engine. The `id` suffix is a random
/// 4-digit number; collisions are possible and deliberately not checked
/// (known limitation — callers depend on the short id shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub name: String,
    /// Full destination string ("City, Country")
    pub location: String,
    pub days: u32,
    /// Number of sites covered, drawn from [days*2, days*3)
    pub sites: u32,
    /// Estimated total cost in whole currency units, always > 0
    pub cost: u32,
    pub upvotes: u32,
    pub views: u32,
    /// RFC 3339 creation instant (backdated 0-12h to look historical)
    pub created_date: String,
    pub user: RouteUser,
    /// Interest tags joined with ", "
    pub interests: String,
    /// Original query text
    pub query: String,
}

/// Placeholder author profile; there is no identity system in scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteUser {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

/// One synthesized day within a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineDay {
    pub title: String,
    /// Exactly 3 activities per day (morning, midday, afternoon)
    pub sites: Vec<Activity>,
    /// Exactly 2 transport legs per day
    pub transportation: Vec<TransportLeg>,
}

/// A templated activity within a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    pub time_slot: String,
    pub description: String,
}

/// A transport leg between activities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportLeg {
    #[serde(rename = "type")]
    pub mode: String,
    /// Leg duration, always within [10, 40)
    pub duration_minutes: u32,
    /// "3.2 km" for street modes, "Line 7" for rail modes
    pub distance: String,
}

/// A route together with its synthesized day-by-day timeline.
///
/// The route alone is what the store keeps; the timeline rides along in
/// the generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedRoute {
    pub route: Route,
    pub timeline: Vec<TimelineDay>,
}
