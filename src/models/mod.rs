// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for zones, queries and verdicts.

pub mod collision;
pub mod flight;
pub mod severity;
pub mod zone;

pub use collision::{
    CollisionResult, FlightPlanReport, PathCollisionResult, PolygonCollisionResult,
    WaypointCollisionResult, WaypointReport,
};
pub use flight::{FlightPlan, Waypoint};
pub use severity::{Severity, SeverityTable};
pub use zone::{Zone, ZoneCollection, ZoneType};
