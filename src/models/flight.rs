// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Flight plan input model.

use crate::geometry::Position;
use geo::Coord;
use serde::Deserialize;

/// A single planned flight location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Waypoint {
    pub id: String,
    /// `[lng, lat]`
    pub coordinates: [f64; 2],
    #[serde(default)]
    pub name: Option<String>,
    /// Meters above ground; carried through, not used for 2D checks
    #[serde(default)]
    pub altitude: Option<f64>,
}

impl Waypoint {
    pub fn new(id: impl Into<String>, lng: f64, lat: f64) -> Self {
        Self {
            id: id.into(),
            coordinates: [lng, lat],
            name: None,
            altitude: None,
        }
    }

    pub fn position(&self) -> Position {
        Coord {
            x: self.coordinates[0],
            y: self.coordinates[1],
        }
    }
}

/// Ordered waypoints forming a route.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightPlan {
    pub id: String,
    pub waypoints: Vec<Waypoint>,
}

impl FlightPlan {
    pub fn path(&self) -> Vec<Position> {
        self.waypoints.iter().map(Waypoint::position).collect()
    }
}
