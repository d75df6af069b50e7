// SPDX-License-Identifier: MIT

//! Route assembly.
//!
//! Merges an extracted intent and an estimated cost into one immutable
//! [`Route`] record and appends it to the shared route store. Assembly
//! writes to the store but never reads it.

use crate::models::intent::city_of;
use crate::models::{Route, RouteUser, TravelIntent};
use crate::store::RouteStore;
use crate::time_utils::format_utc_rfc3339;
use rand::Rng;

/// Route id prefix; the suffix is a random 4-digit number. Collisions are
/// possible and deliberately not retried (known limitation — consumers
/// depend on the short id shape).
pub const ROUTE_ID_PREFIX: &str = "route-";

/// Maximum backdating applied to `created_date`, in minutes (12 hours).
pub const MAX_BACKDATE_MINUTES: i64 = 12 * 60;

/// Build a route from an intent and cost estimate and append it to the store.
pub fn assemble(
    intent: &TravelIntent,
    cost: u32,
    store: &RouteStore,
    rng: &mut impl Rng,
) -> Route {
    let city = city_of(&intent.destination);
    let id = format!("{ROUTE_ID_PREFIX}{:04}", rng.random_range(0..10_000));

    // Backdate creation up to 12h so freshly generated routes read as
    // historical entries in the feed.
    let offset = chrono::Duration::minutes(rng.random_range(0..=MAX_BACKDATE_MINUTES));
    let created_date = format_utc_rfc3339(chrono::Utc::now() - offset);

    let route = Route {
        id,
        name: format!("{days}-Day {city} Discovery", days = intent.days),
        location: intent.destination.clone(),
        days: intent.days,
        // Site count is presentational: roughly 2-3 per day.
        sites: rng.random_range(intent.days * 2..intent.days * 3),
        cost,
        upvotes: 0,
        views: 0,
        created_date,
        user: placeholder_user(),
        interests: intent.interests.join(", "),
        query: intent.raw_query.clone(),
    };

    tracing::info!(
        route_id = %route.id,
        location = %route.location,
        days = route.days,
        cost = route.cost,
        "Assembled route"
    );

    store.append(route.clone());
    route
}

/// Static author stub; there is no identity system in scope.
fn placeholder_user() -> RouteUser {
    RouteUser {
        id: "traveler-001".to_string(),
        name: "Guest Traveler".to_string(),
        avatar: "https://i.pravatar.cc/150?img=12".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tokyo_intent() -> TravelIntent {
        TravelIntent {
            destination: "Tokyo, Japan".to_string(),
            days: 7,
            interests: vec!["culture".to_string(), "local cuisine".to_string()],
            raw_query: "a week in tokyo".to_string(),
        }
    }

    #[test]
    fn test_assemble_populates_route_fields() {
        let store = RouteStore::new();
        let mut rng = StdRng::seed_from_u64(13);

        let route = assemble(&tokyo_intent(), 1260, &store, &mut rng);

        assert_eq!(route.location, "Tokyo, Japan");
        assert_eq!(route.days, 7);
        assert_eq!(route.cost, 1260);
        assert_eq!(route.interests, "culture, local cuisine");
        assert_eq!(route.query, "a week in tokyo");
        assert_eq!(route.upvotes, 0);
        assert_eq!(route.views, 0);
        assert!(route.name.contains("Tokyo"));
    }

    #[test]
    fn test_route_id_shape() {
        let store = RouteStore::new();
        let mut rng = StdRng::seed_from_u64(5);

        let route = assemble(&tokyo_intent(), 900, &store, &mut rng);

        let suffix = route.id.strip_prefix(ROUTE_ID_PREFIX).unwrap();
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_sites_within_two_to_three_per_day() {
        let store = RouteStore::new();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..50 {
            let route = assemble(&tokyo_intent(), 1000, &store, &mut rng);
            assert!(route.sites >= 14 && route.sites < 21);
        }
    }

    #[test]
    fn test_created_date_is_valid_and_backdated() {
        let store = RouteStore::new();
        let mut rng = StdRng::seed_from_u64(31);

        let route = assemble(&tokyo_intent(), 1000, &store, &mut rng);

        let created = chrono::DateTime::parse_from_rfc3339(&route.created_date)
            .expect("created_date must be RFC 3339");
        let age = chrono::Utc::now().signed_duration_since(created);
        assert!(age.num_minutes() >= 0);
        assert!(age.num_minutes() <= MAX_BACKDATE_MINUTES + 1);
    }

    #[test]
    fn test_assemble_appends_to_store() {
        let store = RouteStore::new();
        let mut rng = StdRng::seed_from_u64(77);

        let route = assemble(&tokyo_intent(), 1000, &store, &mut rng);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&route.id).unwrap().days, 7);
    }
}
