// SPDX-License-Identifier: MIT

//! Trip cost estimation.

use crate::models::intent::city_of;
use rand::Rng;

/// Daily rate applied when the city has no entry in the rate table.
pub const DEFAULT_DAILY_RATE: f64 = 120.0;

/// Variance bounds applied to every estimate.
pub const VARIANCE_MIN: f64 = 0.85;
pub const VARIANCE_MAX: f64 = 1.15;

/// Flat daily rates per city, in whole currency units.
fn daily_rate(city: &str) -> f64 {
    match city {
        "Tokyo" => 180.0,
        "Kyoto" => 150.0,
        "Paris" => 170.0,
        "Rome" => 140.0,
        "London" => 190.0,
        "New York" => 210.0,
        "Barcelona" => 130.0,
        "Bali" => 90.0,
        _ => DEFAULT_DAILY_RATE,
    }
}

/// Estimate the total trip cost for a destination and trip length.
///
/// The rate is looked up by the city portion of the destination (before the
/// comma). Variance is drawn uniformly from [0.85, 1.15) via the injected
/// generator, so a seeded generator makes the estimate reproducible. The
/// result is rounded to the nearest whole unit and is > 0 for days >= 1.
pub fn estimate(destination: &str, days: u32, rng: &mut impl Rng) -> u32 {
    let rate = daily_rate(city_of(destination));
    let variance = rng.random_range(VARIANCE_MIN..VARIANCE_MAX);
    (rate * f64::from(days) * variance).round() as u32
}
