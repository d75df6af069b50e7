// SPDX-License-Identifier: MIT

//! Services module - the query → route pipeline.

pub mod assembler;
pub mod cost;
pub mod intent;
pub mod itinerary;
pub mod planner;
pub mod rules;

pub use intent::IntentExtractor;
pub use planner::{Planner, PlannerError};
pub use rules::{CombinePolicy, Rule, RuleTable};
