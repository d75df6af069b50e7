// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod intent;
pub mod route;

pub use intent::TravelIntent;
pub use route::{Activity, GeneratedRoute, Route, RouteUser, TimelineDay, TransportLeg};
