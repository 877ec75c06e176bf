// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collision verdicts returned to the map UI.

use crate::geometry::Position;
use crate::models::severity::Severity;
use crate::models::zone::{Zone, ZoneType};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Verdict for a single waypoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointCollisionResult {
    pub is_colliding: bool,
    pub collision_type: Option<ZoneType>,
    pub area_name: Option<String>,
    pub severity: Severity,
    pub ui_color: &'static str,
    pub message: String,
}

impl WaypointCollisionResult {
    pub fn safe(message: impl Into<String>) -> Self {
        Self {
            is_colliding: false,
            collision_type: None,
            area_name: None,
            severity: Severity::Safe,
            ui_color: Severity::Safe.ui_color(),
            message: message.into(),
        }
    }

    pub fn inside(zone: &Zone, severity: Severity) -> Self {
        let message = match severity {
            Severity::Danger => format!(
                "Waypoint is inside no-fly zone {} ({})",
                zone.name, zone.zone_type
            ),
            _ => format!(
                "Waypoint is inside restricted zone {} ({}); flight permission may be required",
                zone.name, zone.zone_type
            ),
        };
        Self {
            is_colliding: true,
            collision_type: Some(zone.zone_type.clone()),
            area_name: Some(zone.name.clone()),
            severity,
            ui_color: severity.ui_color(),
            message,
        }
    }
}

/// Verdict for a polyline flight path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathCollisionResult {
    pub is_colliding: bool,
    #[serde(serialize_with = "serialize_positions")]
    pub intersection_points: Vec<Position>,
    pub severity: Severity,
    pub message: String,
}

impl PathCollisionResult {
    pub fn safe(message: impl Into<String>) -> Self {
        Self {
            is_colliding: false,
            intersection_points: Vec::new(),
            severity: Severity::Safe,
            message: message.into(),
        }
    }
}

/// Verdict for a drawn polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonCollisionResult {
    pub is_colliding: bool,
    /// Square meters, summed over zones (overlapping zones count twice).
    pub overlap_area: f64,
    /// `overlap_area / area(query)`; can exceed 1 when zones overlap each other.
    pub overlap_ratio: f64,
    pub severity: Severity,
    pub message: String,
}

impl PolygonCollisionResult {
    pub fn safe(message: impl Into<String>) -> Self {
        Self {
            is_colliding: false,
            overlap_area: 0.0,
            overlap_ratio: 0.0,
            severity: Severity::Safe,
            message: message.into(),
        }
    }
}

/// Any of the three verdicts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CollisionResult {
    Waypoint(WaypointCollisionResult),
    Path(PathCollisionResult),
    Polygon(PolygonCollisionResult),
}

impl CollisionResult {
    pub fn is_colliding(&self) -> bool {
        match self {
            CollisionResult::Waypoint(r) => r.is_colliding,
            CollisionResult::Path(r) => r.is_colliding,
            CollisionResult::Polygon(r) => r.is_colliding,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            CollisionResult::Waypoint(r) => r.severity,
            CollisionResult::Path(r) => r.severity,
            CollisionResult::Polygon(r) => r.severity,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CollisionResult::Waypoint(r) => &r.message,
            CollisionResult::Path(r) => &r.message,
            CollisionResult::Polygon(r) => &r.message,
        }
    }
}

/// Waypoint verdict tagged with the waypoint it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaypointReport {
    pub waypoint_id: String,
    #[serde(flatten)]
    pub result: WaypointCollisionResult,
}

/// Summary of a whole flight plan: every waypoint plus the connecting path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPlanReport {
    pub waypoint_results: Vec<WaypointReport>,
    pub path_result: Option<PathCollisionResult>,
    pub has_collisions: bool,
    /// Colliding waypoints plus path intersection points.
    pub collision_count: usize,
    pub overall_severity: Severity,
}

impl FlightPlanReport {
    pub fn new(
        waypoint_results: Vec<WaypointReport>,
        path_result: Option<PathCollisionResult>,
    ) -> Self {
        let mut collision_count = waypoint_results
            .iter()
            .filter(|w| w.result.is_colliding)
            .count();
        if let Some(path) = path_result.as_ref().filter(|p| p.is_colliding) {
            collision_count += path.intersection_points.len();
        }

        let overall_severity = waypoint_results
            .iter()
            .map(|w| w.result.severity)
            .chain(path_result.iter().map(|p| p.severity))
            .max()
            .unwrap_or_default();

        Self {
            waypoint_results,
            path_result,
            has_collisions: collision_count > 0,
            collision_count,
            overall_severity,
        }
    }

    pub fn result_for(&self, waypoint_id: &str) -> Option<&WaypointCollisionResult> {
        self.waypoint_results
            .iter()
            .find(|w| w.waypoint_id == waypoint_id)
            .map(|w| &w.result)
    }
}

/// Positions go over the wire as `[lng, lat]` pairs.
fn serialize_positions<S: Serializer>(
    positions: &[Position],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(positions.len()))?;
    for p in positions {
        seq.serialize_element(&[p.x, p.y])?;
    }
    seq.end()
}
