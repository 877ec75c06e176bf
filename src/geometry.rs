// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Planar geometry predicates over `[lng, lat]` coordinates.
//!
//! Degrees are treated as planar Cartesian coordinates. There is no geodesic
//! correction, which is fine at city/regional scale. Areas are converted to
//! square meters with a local equirectangular projection (see
//! [`LocalProjection`]).
//!
//! Boundary policy: a point exactly on a ring edge (outer ring or hole) is
//! *inside* the polygon. Every caller goes through [`point_in_polygon`], so
//! the policy is the same everywhere.
//!
//! Precision: overlap areas come from `geo`'s boolean ops, which snap
//! coordinates to an integer grid scaled to the combined extent of both
//! inputs. A query that is tiny next to the zone it sits in can therefore
//! see `overlap / area` off from 1 by up to about 1e-3 (a 0.00001° square
//! inside a 5° zone). Polygons of comparable size agree to about 1e-6.

use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::line_intersection::{line_intersection, LineIntersection};
use geo::{
    Area, BooleanOps, BoundingRect, Coord, Intersects, Line, LineString, MapCoords, Polygon, Rect,
};
use rstar::AABB;

/// A `[lng, lat]` pair, `x` = longitude, `y` = latitude.
pub type Position = Coord<f64>;

/// Mean Earth radius (IUGG), meters.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Overlaps below this many square meters are float noise from touching edges.
const MIN_OVERLAP_M2: f64 = 1e-6;

/// Axis-aligned bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox(Rect<f64>);

impl BoundingBox {
    /// Degenerate box covering a single point.
    pub fn from_point(point: Position) -> Self {
        Self(point.bounding_rect())
    }

    pub fn from_line(line: Line<f64>) -> Self {
        Self(line.bounding_rect())
    }

    /// Inclusive: boxes sharing only an edge or a corner intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.0.intersects(&other.0)
    }

    pub fn center(&self) -> Position {
        self.0.center()
    }

    /// `[minLng, minLat, maxLng, maxLat]`
    pub fn to_array(&self) -> [f64; 4] {
        let (min, max) = (self.0.min(), self.0.max());
        [min.x, min.y, max.x, max.y]
    }

    pub fn to_aabb(&self) -> AABB<[f64; 2]> {
        AABB::from_corners(self.0.min().into(), self.0.max().into())
    }
}

/// Bounding box of any geometry (line, path, polygon outer ring).
/// `None` for an empty geometry.
pub fn bounding_box<G: BoundingRect<f64>>(geometry: &G) -> Option<BoundingBox> {
    let rect: Option<Rect<f64>> = geometry.bounding_rect().into();
    rect.map(BoundingBox)
}

/// True when the outer ring has fewer than three distinct vertices.
///
/// Runs once per candidate zone on every check, so it walks the ring in
/// place and stops as soon as three distinct vertices are seen.
pub fn is_degenerate(polygon: &Polygon<f64>) -> bool {
    distinct_vertices(polygon.exterior(), 3) < 3
}

/// Distinct vertices of a ring, ignoring repeated neighbours and the closing
/// point, counted up to `limit`.
fn distinct_vertices(ring: &LineString<f64>, limit: usize) -> usize {
    let Some(first) = ring.0.first() else {
        return 0;
    };
    let changes = ring
        .0
        .windows(2)
        .filter(|pair| pair[0] != pair[1])
        .take(limit)
        .count();
    let mut count = changes + 1;
    if count > 1 && ring.0.last() == Some(first) {
        count -= 1;
    }
    count.min(limit)
}

/// Point-in-polygon test honoring holes. Boundary points count as inside.
/// Degenerate polygons contain nothing.
pub fn point_in_polygon(point: Position, polygon: &Polygon<f64>) -> bool {
    if is_degenerate(polygon) {
        return false;
    }
    matches!(
        polygon.coordinate_position(&point),
        CoordPos::Inside | CoordPos::OnBoundary
    )
}

/// Intersection point of segments `a1-a2` and `b1-b2`, if they meet.
///
/// Collinear overlap is reported as a single point: the start of the shared
/// sub-segment.
pub fn segments_intersect(
    a1: Position,
    a2: Position,
    b1: Position,
    b2: Position,
) -> Option<Position> {
    match line_intersection(Line::new(a1, a2), Line::new(b1, b2))? {
        LineIntersection::SinglePoint { intersection, .. } => Some(intersection),
        LineIntersection::Collinear { intersection } => Some(intersection.start),
    }
}

/// All edges of a polygon: outer ring first, then each hole, in ring order.
pub fn ring_edges(polygon: &Polygon<f64>) -> impl Iterator<Item = Line<f64>> + '_ {
    polygon
        .exterior()
        .lines()
        .chain(polygon.interiors().iter().flat_map(|ring| ring.lines()))
}

/// Local equirectangular projection from degrees to meters.
///
/// `x = (lng - lng0) * R * cos(lat0)`, `y = (lat - lat0) * R`, with the
/// reference point at the centre of a bounding box. The mapping is affine,
/// so straight edges stay straight and polygon intersection commutes with
/// projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalProjection {
    origin: Position,
    meters_per_deg_lng: f64,
    meters_per_deg_lat: f64,
}

impl LocalProjection {
    pub fn centered_on(bbox: &BoundingBox) -> Self {
        let origin = bbox.center();
        let meters_per_deg_lat = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
        Self {
            origin,
            meters_per_deg_lng: meters_per_deg_lat * origin.y.to_radians().cos(),
            meters_per_deg_lat,
        }
    }

    pub fn project(&self, coord: Position) -> Coord<f64> {
        Coord {
            x: (coord.x - self.origin.x) * self.meters_per_deg_lng,
            y: (coord.y - self.origin.y) * self.meters_per_deg_lat,
        }
    }

    pub fn project_polygon(&self, polygon: &Polygon<f64>) -> Polygon<f64> {
        polygon.map_coords(|c| self.project(c))
    }
}

/// Area of a polygon (holes subtracted) in square meters, projected around
/// its own bounding-box centre. Degenerate polygons have area 0.
pub fn polygon_area(polygon: &Polygon<f64>) -> f64 {
    let Some(bbox) = bounding_box(polygon) else {
        return 0.0;
    };
    if is_degenerate(polygon) {
        return 0.0;
    }
    LocalProjection::centered_on(&bbox)
        .project_polygon(polygon)
        .unsigned_area()
}

/// Area of the geometric intersection of two polygons in square meters.
///
/// Both polygons are projected around the centre of `a`'s bounding box, so
/// `polygons_overlap_area(q, z) / polygon_area(q)` is a consistent ratio.
/// Disjoint or merely touching polygons give 0.
pub fn polygons_overlap_area(a: &Polygon<f64>, b: &Polygon<f64>) -> f64 {
    if is_degenerate(a) || is_degenerate(b) {
        return 0.0;
    }
    let (Some(bbox_a), Some(bbox_b)) = (bounding_box(a), bounding_box(b)) else {
        return 0.0;
    };
    if !bbox_a.intersects(&bbox_b) {
        return 0.0;
    }

    let projection = LocalProjection::centered_on(&bbox_a);
    let overlap = projection
        .project_polygon(a)
        .intersection(&projection.project_polygon(b))
        .unsigned_area();

    if overlap < MIN_OVERLAP_M2 {
        0.0
    } else {
        overlap
    }
}
