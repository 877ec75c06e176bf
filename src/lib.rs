// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Drone-Zones: collision checks between drone flight plans and restricted airspace
//!
//! This crate checks waypoints, flight paths and drawn areas against
//! prohibited zones (densely inhabited districts, airport surroundings,
//! no-fly zones) and classifies each hit by severity for the map UI.

pub mod config;
pub mod error;
pub mod geometry;
pub mod models;
pub mod services;

pub use geometry::{BoundingBox, Position};
pub use models::{
    CollisionResult, FlightPlan, FlightPlanReport, PathCollisionResult, PolygonCollisionResult,
    Severity, SeverityTable, Waypoint, WaypointCollisionResult, Zone, ZoneCollection, ZoneType,
};
pub use services::{CollisionEvaluator, CollisionService, Query, ZoneIndex, ZoneSource};
