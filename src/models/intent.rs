// SPDX-License-Identifier: MIT

//! Structured interpretation of a free-text travel query.

use serde::{Deserialize, Serialize};

/// The structured intent derived from a raw travel query.
///
/// Created once per incoming query, consumed synchronously by the cost
/// estimator and itinerary synthesizer, never persisted itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelIntent {
    /// Resolved destination, always non-empty ("City, Country" form)
    pub destination: String,
    /// Trip length in days, always within [1, 14]
    pub days: u32,
    /// Matched interest tags, in rule-table order, never empty
    pub interests: Vec<String>,
    /// Original query text, retained verbatim for audit/display
    pub raw_query: String,
}

impl TravelIntent {
    /// City portion of the destination (everything before the comma).
    pub fn city(&self) -> &str {
        city_of(&self.destination)
    }
}

/// Extract the city portion of a "City, Country" destination string.
pub fn city_of(destination: &str) -> &str {
    destination
        .split(',')
        .next()
        .map(str::trim)
        .unwrap_or(destination)
}
