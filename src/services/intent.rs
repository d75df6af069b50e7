// SPDX-License-Identifier: MIT

//! Query intent extraction.
//!
//! Turns a free-text travel request into a [`TravelIntent`] using fixed,
//! ordered rule tables. This is deliberately not NLP: destination and
//! duration are first-match-wins over a fixed table, interests are
//! accumulate-all, and every field has a deterministic fallback so
//! extraction never fails, whatever the input.

use crate::models::TravelIntent;
use crate::services::rules::{CombinePolicy, Rule, RuleTable};
use regex::Regex;

/// Destination used when no pattern in the table matches.
pub const DEFAULT_DESTINATION: &str = "Paris, France";

/// Trip length used when the query gives no usable duration signal.
pub const DEFAULT_DAYS: u32 = 3;

/// Bounds applied to an explicit "<n> days" phrase.
pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 14;

/// Interest tags applied when the destination has no dedicated default set.
const FALLBACK_INTERESTS: [&str; 3] = ["sightseeing", "local cuisine", "culture"];

/// Ordered destination table. First match wins, so the order here is a
/// product decision: a query mentioning both Tokyo and Rome resolves to
/// Tokyo because Tokyo is listed first.
fn destination_table() -> RuleTable<&'static str> {
    RuleTable::new(
        CombinePolicy::FirstMatch,
        vec![
            Rule::new(&["tokyo", "japan"], "Tokyo, Japan"),
            Rule::new(&["kyoto"], "Kyoto, Japan"),
            Rule::new(&["paris", "france"], "Paris, France"),
            Rule::new(&["rome", "italy"], "Rome, Italy"),
            Rule::new(&["london", "england"], "London, UK"),
            Rule::new(&["new york", "nyc", "manhattan"], "New York, USA"),
            Rule::new(&["barcelona", "spain"], "Barcelona, Spain"),
            Rule::new(&["bali", "indonesia"], "Bali, Indonesia"),
        ],
    )
}

/// Accumulate-all interest table: every matching rule contributes its tag.
///
/// Tags are appended in table order and are not deduplicated afterwards;
/// that matches the historical behavior of the rules and overlapping
/// patterns are resolved by grouping them under one tag here.
fn interest_table() -> RuleTable<&'static str> {
    RuleTable::new(
        CombinePolicy::Accumulate,
        vec![
            Rule::new(&["culture", "traditional", "temple", "heritage"], "culture"),
            Rule::new(&["food", "cuisine", "restaurant", "dining", "culinary"], "local cuisine"),
            Rule::new(&["museum", "art", "gallery"], "art museums"),
            Rule::new(&["history", "historic", "ancient", "ruins"], "history"),
            Rule::new(&["shopping", "market", "boutique"], "shopping"),
            Rule::new(&["nature", "hiking", "outdoor", "mountain"], "nature"),
            Rule::new(&["beach", "coast", "island"], "beaches"),
            Rule::new(&["nightlife", "bars", "clubs"], "nightlife"),
        ],
    )
}

/// Default interest tags per destination, used only when no interest rule
/// matched the query at all.
fn default_interests_for(destination: &str) -> Vec<String> {
    let tags: &[&str] = match destination {
        "Tokyo, Japan" => &["culture", "local cuisine", "temples"],
        "Kyoto, Japan" => &["temples", "gardens", "culture"],
        "Paris, France" => &["art museums", "local cuisine", "architecture"],
        "Rome, Italy" => &["history", "local cuisine", "architecture"],
        "Bali, Indonesia" => &["beaches", "nature"],
        _ => &FALLBACK_INTERESTS,
    };
    tags.iter().map(|t| t.to_string()).collect()
}

/// Extracts a [`TravelIntent`] from raw query text.
pub struct IntentExtractor {
    destinations: RuleTable<&'static str>,
    interests: RuleTable<&'static str>,
    /// Bare "week" on a word boundary; must not fire on "weekend"
    week_re: Regex,
    weekend_re: Regex,
    explicit_days_re: Regex,
}

impl Default for IntentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentExtractor {
    pub fn new() -> Self {
        Self {
            destinations: destination_table(),
            interests: interest_table(),
            week_re: Regex::new(r"\bweek\b").expect("static regex"),
            weekend_re: Regex::new(r"\bweekend\b").expect("static regex"),
            explicit_days_re: Regex::new(r"(\d+)\s*day").expect("static regex"),
        }
    }

    /// Derive a fully populated intent from the raw query. Never fails.
    pub fn extract(&self, query: &str) -> TravelIntent {
        let lowered = query.to_lowercase();

        let destination = self
            .destinations
            .first_match(&lowered)
            .map(|d| d.to_string())
            .unwrap_or_else(|| DEFAULT_DESTINATION.to_string());

        let days = self.resolve_days(&lowered);
        let interests = self.resolve_interests(&lowered, &destination);

        tracing::debug!(
            destination = %destination,
            days,
            interests = ?interests,
            "Extracted travel intent"
        );

        TravelIntent {
            destination,
            days,
            interests,
            raw_query: query.to_string(),
        }
    }

    /// Duration precedence: week → weekend → explicit day count → default.
    /// Later rules are not consulted once one is satisfied.
    fn resolve_days(&self, lowered: &str) -> u32 {
        if self.week_re.is_match(lowered) || lowered.contains("7 day") {
            return 7;
        }
        if self.weekend_re.is_match(lowered) || lowered.contains("2 day") {
            return 2;
        }
        if let Some(caps) = self.explicit_days_re.captures(lowered) {
            if let Ok(n) = caps[1].parse::<u32>() {
                return n.clamp(MIN_DAYS, MAX_DAYS);
            }
        }
        DEFAULT_DAYS
    }

    /// Collect every matching interest tag; fall back to the destination's
    /// default set when nothing matched.
    fn resolve_interests(&self, lowered: &str, destination: &str) -> Vec<String> {
        let matched: Vec<String> = self
            .interests
            .evaluate(lowered)
            .into_iter()
            .map(|t| t.to_string())
            .collect();

        if matched.is_empty() {
            default_interests_for(destination)
        } else {
            matched
        }
    }
}
