// SPDX-License-Identifier: MIT

//! Day-by-day itinerary synthesis.
//!
//! Expands a destination and trip length into one [`TimelineDay`] per day.
//! Content is fully templated from the destination and day index; the only
//! randomness is the cosmetic jitter on transport legs, drawn from the
//! injected generator so tests can pin it down.

use crate::models::intent::city_of;
use crate::models::{Activity, TimelineDay, TransportLeg};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Transport modes a leg can use.
pub const TRANSPORT_MODES: [&str; 5] = ["Metro", "Bus", "Walk", "Train", "Taxi"];

/// Leg duration bounds in minutes (half-open).
pub const LEG_DURATION_MIN: u32 = 10;
pub const LEG_DURATION_MAX: u32 = 40;

/// Bounds for rail line numbers and street distances (half-open).
pub const LINE_NUMBER_MIN: u32 = 1;
pub const LINE_NUMBER_MAX: u32 = 15;
pub const DISTANCE_KM_MIN: f64 = 1.0;
pub const DISTANCE_KM_MAX: f64 = 10.0;

/// Synthesize exactly `days` timeline days for a destination.
pub fn synthesize(destination: &str, days: u32, rng: &mut impl Rng) -> Vec<TimelineDay> {
    let city = city_of(destination);
    (1..=days)
        .map(|day| TimelineDay {
            title: day_title(city, day, days),
            sites: day_activities(city, day),
            transportation: day_legs(rng),
        })
        .collect()
}

/// Positional day titles: arrival, final, or a generic interior day.
fn day_title(city: &str, day: u32, total: u32) -> String {
    if day == 1 {
        "Day 1: Arrival & Orientation".to_string()
    } else if day == total {
        format!("Day {day}: Final Explorations")
    } else {
        format!("Day {day}: Exploring {city}")
    }
}

/// Three activities per day in a fixed slot scheme: a morning sightseeing
/// block, a midday dining block, an afternoon sightseeing block.
fn day_activities(city: &str, day: u32) -> Vec<Activity> {
    vec![
        Activity {
            name: format!("{city} Highlights Walk"),
            time_slot: "09:00 AM".to_string(),
            description: format!("Morning walking route through {city} on day {day}."),
        },
        Activity {
            name: format!("Local Flavors of {city}"),
            time_slot: "12:30 PM".to_string(),
            description: format!("Midday meal at a neighborhood spot in {city}, day {day}."),
        },
        Activity {
            name: format!("{city} District Exploration"),
            time_slot: "03:00 PM".to_string(),
            description: format!("Afternoon visit to a signature district of {city}, day {day}."),
        },
    ]
}

/// Two transport legs per day with bounded cosmetic jitter.
fn day_legs(rng: &mut impl Rng) -> Vec<TransportLeg> {
    (0..2).map(|_| random_leg(rng)).collect()
}

fn random_leg(rng: &mut impl Rng) -> TransportLeg {
    let mode = *TRANSPORT_MODES.choose(rng).expect("mode list is non-empty");
    let distance = if mode == "Metro" || mode == "Train" {
        format!("Line {}", rng.random_range(LINE_NUMBER_MIN..LINE_NUMBER_MAX))
    } else {
        format!("{:.1} km", rng.random_range(DISTANCE_KM_MIN..DISTANCE_KM_MAX))
    };

    TransportLeg {
        mode: mode.to_string(),
        duration_minutes: rng.random_range(LEG_DURATION_MIN..LEG_DURATION_MAX),
        distance,
    }
}
