// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collision evaluation for waypoints, paths and polygons.
//!
//! Every check is a pure function of the query, the zones and the severity
//! table. Candidates come from a [`ZoneSource`]: the plain collection (full
//! scan) or a [`ZoneIndex`]. Both give identical verdicts; the index only
//! skips zones whose bounding box is nowhere near the query.
//!
//! Ordering rules:
//! - Waypoints report the *first* zone in collection order that contains
//!   the point, even if a later overlapping zone is more severe.
//! - Paths and polygons report the *maximum* severity of all zones hit. On
//!   equal severity the first zone found names the message.

use crate::geometry::{self, BoundingBox, Position};
use crate::models::{
    CollisionResult, PathCollisionResult, PolygonCollisionResult, Severity, SeverityTable,
    WaypointCollisionResult, Zone, ZoneCollection,
};
use crate::services::index::{ZoneIndex, ZoneSource};
use geo::{Line, Polygon};

const SAFE_WAYPOINT: &str = "No restricted zones at this waypoint";
const SAFE_PATH: &str = "Path does not cross any restricted zone";
const SAFE_POLYGON: &str = "Area does not overlap any restricted zone";
const SHORT_PATH: &str = "A path needs at least 2 points";
const DEGENERATE_POLYGON: &str = "An area needs at least 3 distinct vertices";

/// Query geometry accepted by [`CollisionEvaluator::evaluate_linear`] and
/// [`CollisionEvaluator::evaluate_with_index`].
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Waypoint(Position),
    Path(Vec<Position>),
    Polygon(Polygon<f64>),
}

/// Most severe zone seen so far. Only a strictly higher severity replaces it.
struct WorstZone<'a> {
    severity: Severity,
    zone: &'a Zone,
}

fn note_hit<'a>(worst: &mut Option<WorstZone<'a>>, zone: &'a Zone, severity: Severity) {
    match worst {
        Some(w) if severity <= w.severity => {}
        _ => *worst = Some(WorstZone { severity, zone }),
    }
}

/// Runs collision checks with a given severity table.
#[derive(Debug, Clone, Default)]
pub struct CollisionEvaluator {
    severities: SeverityTable,
}

impl CollisionEvaluator {
    pub fn new(severities: SeverityTable) -> Self {
        Self { severities }
    }

    pub fn severities(&self) -> &SeverityTable {
        &self.severities
    }

    /// First zone (in collection order) containing `point`, boundary inclusive.
    pub fn check_waypoint<S: ZoneSource + ?Sized>(
        &self,
        point: Position,
        zones: &S,
    ) -> WaypointCollisionResult {
        if zones.is_empty() {
            return WaypointCollisionResult::safe(SAFE_WAYPOINT);
        }

        let bbox = BoundingBox::from_point(point);
        let hit = zones
            .candidates(&bbox)
            .into_iter()
            .find(|zone| geometry::point_in_polygon(point, &zone.geometry));

        match hit {
            Some(zone) => {
                let severity = self.severities.severity_for(&zone.zone_type);
                tracing::debug!(zone = %zone.name, %severity, "Waypoint inside zone");
                WaypointCollisionResult::inside(zone, severity)
            }
            None => WaypointCollisionResult::safe(SAFE_WAYPOINT),
        }
    }

    /// Every crossing between the path and any zone ring edge.
    ///
    /// Points are ordered by path segment, then zone order, then edge order.
    /// Each segment reports a given point at most once per zone, even where
    /// it passes through a ring vertex or runs along an edge.
    /// A path lying entirely inside a zone crosses no edge and is reported
    /// clear; its waypoints are caught by [`Self::check_waypoint`].
    pub fn check_path<S: ZoneSource + ?Sized>(
        &self,
        path: &[Position],
        zones: &S,
    ) -> PathCollisionResult {
        if path.len() < 2 {
            return PathCollisionResult::safe(SHORT_PATH);
        }
        if zones.is_empty() {
            return PathCollisionResult::safe(SAFE_PATH);
        }

        let mut intersection_points = Vec::new();
        let mut worst: Option<WorstZone<'_>> = None;

        for segment in path.windows(2) {
            let (start, end) = (segment[0], segment[1]);
            let bbox = BoundingBox::from_line(Line::new(start, end));

            for zone in zones.candidates(&bbox) {
                if zone.is_degenerate() {
                    continue;
                }
                let before = intersection_points.len();
                for edge in geometry::ring_edges(&zone.geometry) {
                    let Some(point) = geometry::segments_intersect(start, end, edge.start, edge.end)
                    else {
                        continue;
                    };
                    // A vertex or a shared stretch of edge is met from more than one edge
                    if !intersection_points[before..].contains(&point) {
                        intersection_points.push(point);
                    }
                }
                if intersection_points.len() > before {
                    note_hit(
                        &mut worst,
                        zone,
                        self.severities.severity_for(&zone.zone_type),
                    );
                }
            }
        }

        match worst {
            Some(WorstZone { severity, zone }) => {
                let message = format!(
                    "Path crosses restricted zone boundaries at {} point(s); most severe: {} ({})",
                    intersection_points.len(),
                    zone.name,
                    zone.zone_type
                );
                tracing::debug!(
                    points = intersection_points.len(),
                    %severity,
                    "Path crosses zones"
                );
                PathCollisionResult {
                    is_colliding: true,
                    intersection_points,
                    severity,
                    message,
                }
            }
            None => PathCollisionResult::safe(SAFE_PATH),
        }
    }

    /// Overlap area between the query polygon and all zones.
    ///
    /// Areas are summed per zone without deduplication, so zones that overlap
    /// each other are counted twice and `overlap_ratio` may exceed 1.
    pub fn check_polygon<S: ZoneSource + ?Sized>(
        &self,
        polygon: &Polygon<f64>,
        zones: &S,
    ) -> PolygonCollisionResult {
        let Some(bbox) = geometry::bounding_box(polygon) else {
            return PolygonCollisionResult::safe(DEGENERATE_POLYGON);
        };
        if geometry::is_degenerate(polygon) {
            return PolygonCollisionResult::safe(DEGENERATE_POLYGON);
        }
        if zones.is_empty() {
            return PolygonCollisionResult::safe(SAFE_POLYGON);
        }

        let mut overlap_area = 0.0;
        let mut worst: Option<WorstZone<'_>> = None;

        for zone in zones.candidates(&bbox) {
            let area = geometry::polygons_overlap_area(polygon, &zone.geometry);
            if area > 0.0 {
                overlap_area += area;
                note_hit(
                    &mut worst,
                    zone,
                    self.severities.severity_for(&zone.zone_type),
                );
            }
        }

        let Some(WorstZone { severity, zone }) = worst else {
            return PolygonCollisionResult::safe(SAFE_POLYGON);
        };

        let query_area = geometry::polygon_area(polygon);
        let overlap_ratio = if query_area > 0.0 {
            overlap_area / query_area
        } else {
            0.0
        };
        tracing::debug!(overlap_area, overlap_ratio, %severity, "Area overlaps zones");

        PolygonCollisionResult {
            is_colliding: true,
            overlap_area,
            overlap_ratio,
            severity,
            message: format!(
                "Area overlaps restricted zones ({:.1}% of area); most severe: {} ({})",
                overlap_ratio * 100.0,
                zone.name,
                zone.zone_type
            ),
        }
    }

    /// Dispatch any query against candidates from `zones`.
    pub fn evaluate<S: ZoneSource + ?Sized>(&self, query: &Query, zones: &S) -> CollisionResult {
        match query {
            Query::Waypoint(point) => CollisionResult::Waypoint(self.check_waypoint(*point, zones)),
            Query::Path(path) => CollisionResult::Path(self.check_path(path, zones)),
            Query::Polygon(polygon) => CollisionResult::Polygon(self.check_polygon(polygon, zones)),
        }
    }

    /// Evaluate by scanning every zone.
    pub fn evaluate_linear(&self, query: &Query, zones: &ZoneCollection) -> CollisionResult {
        self.evaluate(query, zones)
    }

    /// Evaluate using the spatial index for candidate retrieval.
    pub fn evaluate_with_index(&self, query: &Query, index: &ZoneIndex) -> CollisionResult {
        self.evaluate(query, index)
    }
}

/// Waypoint check with the default severity table.
pub fn check_waypoint_collision<S: ZoneSource + ?Sized>(
    point: Position,
    zones: &S,
) -> WaypointCollisionResult {
    CollisionEvaluator::default().check_waypoint(point, zones)
}

/// Path check with the default severity table.
pub fn check_path_collision<S: ZoneSource + ?Sized>(
    path: &[Position],
    zones: &S,
) -> PathCollisionResult {
    CollisionEvaluator::default().check_path(path, zones)
}

/// Polygon check with the default severity table.
pub fn check_polygon_collision<S: ZoneSource + ?Sized>(
    polygon: &Polygon<f64>,
    zones: &S,
) -> PolygonCollisionResult {
    CollisionEvaluator::default().check_polygon(polygon, zones)
}
