// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collision detection against the Tokyo DID / Haneda fixture.
//!
//! These cover the documented waypoint, path and polygon behavior, including
//! the boundary policy and the first-match rule for overlapping zones.

mod common;

use common::{square_zone, tokyo_zones};
use drone_zones::services::{
    check_path_collision, check_polygon_collision, check_waypoint_collision,
};
use drone_zones::{Severity, ZoneCollection, ZoneIndex, ZoneType};
use geo::{coord, polygon};

#[test]
fn test_waypoint_inside_did() {
    let zones = tokyo_zones();
    let result = check_waypoint_collision(coord! { x: 139.77, y: 35.68 }, &zones);

    assert!(result.is_colliding);
    assert_eq!(result.collision_type, Some(ZoneType::Did));
    assert_eq!(result.area_name.as_deref(), Some("Tokyo Station DID"));
    assert_eq!(result.severity, Severity::Warning);
    assert_eq!(result.ui_color, "#FFA500");
}

#[test]
fn test_waypoint_inside_airport() {
    let zones = tokyo_zones();
    let result = check_waypoint_collision(coord! { x: 139.75, y: 35.57 }, &zones);

    assert!(result.is_colliding);
    assert_eq!(result.collision_type, Some(ZoneType::Airport));
    assert_eq!(result.area_name.as_deref(), Some("Haneda Airport"));
    assert_eq!(result.severity, Severity::Danger);
    assert_eq!(result.ui_color, "#FF0000");
}

#[test]
fn test_waypoint_outside_all_zones() {
    let zones = tokyo_zones();
    let result = check_waypoint_collision(coord! { x: 140.0, y: 36.0 }, &zones);

    assert!(!result.is_colliding);
    assert_eq!(result.severity, Severity::Safe);
    assert_eq!(result.collision_type, None);
    assert_eq!(result.area_name, None);
    assert_eq!(result.ui_color, "#00FF00");
}

#[test]
fn test_waypoint_on_edge_is_colliding_every_time() {
    let zones = tokyo_zones();
    let index = ZoneIndex::build(zones.clone());
    let on_west_edge = coord! { x: 139.76, y: 35.68 };

    for _ in 0..10 {
        assert!(check_waypoint_collision(on_west_edge, &zones).is_colliding);
        assert!(check_waypoint_collision(on_west_edge, &index).is_colliding);
    }
}

#[test]
fn test_waypoint_in_hole_is_safe() {
    let zone = drone_zones::Zone::new(
        "Ring town",
        ZoneType::Did,
        polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 3.0, y: 1.0), (x: 3.0, y: 3.0), (x: 1.0, y: 3.0)]]
        ),
    );
    let zones = ZoneCollection::new(vec![zone]);

    assert!(!check_waypoint_collision(coord! { x: 2.0, y: 2.0 }, &zones).is_colliding);
    assert!(check_waypoint_collision(coord! { x: 0.5, y: 2.0 }, &zones).is_colliding);
}

#[test]
fn test_overlapping_zones_report_first_in_order() {
    // The AIRPORT zone is more severe, but the DID comes first and wins.
    let zones = ZoneCollection::new(vec![
        square_zone("Suburb", ZoneType::Did, 0.0, 0.0, 2.0),
        square_zone("Airfield", ZoneType::Airport, 1.0, 1.0, 2.0),
    ]);
    let point = coord! { x: 1.5, y: 1.5 };

    let linear = check_waypoint_collision(point, &zones);
    let indexed = check_waypoint_collision(point, &ZoneIndex::build(zones.clone()));

    assert_eq!(linear.area_name.as_deref(), Some("Suburb"));
    assert_eq!(linear.severity, Severity::Warning);
    assert_eq!(linear, indexed);
}

#[test]
fn test_path_crossing_did() {
    let zones = tokyo_zones();
    let path = [coord! { x: 139.75, y: 35.68 }, coord! { x: 139.79, y: 35.68 }];
    let result = check_path_collision(&path, &zones);

    assert!(result.is_colliding);
    assert_eq!(result.intersection_points.len(), 2);
    assert_eq!(result.severity, Severity::Warning);

    let mut xs: Vec<f64> = result.intersection_points.iter().map(|p| p.x).collect();
    xs.sort_by(f64::total_cmp);
    assert!((xs[0] - 139.76).abs() < 1e-9);
    assert!((xs[1] - 139.78).abs() < 1e-9);
}

#[test]
fn test_path_along_did_edge_reports_each_point_once() {
    // Runs along the DID's south edge, touching both southern corners
    let zones = tokyo_zones();
    let path = [coord! { x: 139.75, y: 35.67 }, coord! { x: 139.79, y: 35.67 }];
    let result = check_path_collision(&path, &zones);

    assert!(result.is_colliding);
    assert_eq!(result.intersection_points.len(), 2);
    for (p, x) in result.intersection_points.iter().zip([139.76, 139.78]) {
        assert!((p.x - x).abs() < 1e-9, "got {:?}, expected x = {}", p, x);
        assert!((p.y - 35.67).abs() < 1e-9);
    }
    assert!(result.message.contains("2 point(s)"));
}

#[test]
fn test_path_from_corner_reports_one_point() {
    // Starts on the DID's south-west corner, shared by two edges
    let zones = tokyo_zones();
    let corner = zones.zones()[0].geometry.exterior().0[0];
    let path = [corner, coord! { x: 139.77, y: 35.68 }];
    let result = check_path_collision(&path, &zones);

    assert!(result.is_colliding);
    assert_eq!(result.intersection_points, vec![corner]);
}

#[test]
fn test_path_crossing_airport() {
    let zones = tokyo_zones();
    let path = [coord! { x: 139.65, y: 35.57 }, coord! { x: 139.85, y: 35.57 }];
    let result = check_path_collision(&path, &zones);

    assert!(result.is_colliding);
    assert!(!result.intersection_points.is_empty());
    assert_eq!(result.severity, Severity::Danger);
}

#[test]
fn test_path_outside_all_zones() {
    let zones = tokyo_zones();
    let path = [coord! { x: 140.0, y: 36.0 }, coord! { x: 140.1, y: 36.1 }];
    let result = check_path_collision(&path, &zones);

    assert!(!result.is_colliding);
    assert!(result.intersection_points.is_empty());
    assert_eq!(result.severity, Severity::Safe);
}

#[test]
fn test_path_with_no_zones() {
    let path = [coord! { x: 139.75, y: 35.68 }, coord! { x: 139.79, y: 35.68 }];
    let result = check_path_collision(&path, &ZoneCollection::default());
    assert!(result.intersection_points.is_empty());
    assert!(!result.is_colliding);
}

#[test]
fn test_single_point_path_is_insufficient() {
    let result = check_path_collision(&[coord! { x: 139.77, y: 35.68 }], &tokyo_zones());
    assert!(!result.is_colliding);
    assert_eq!(result.severity, Severity::Safe);
    assert!(result.message.contains("at least 2 points"));
}

#[test]
fn test_polygon_overlapping_did() {
    let zones = tokyo_zones();
    let query = polygon![
        (x: 139.765, y: 35.675),
        (x: 139.775, y: 35.675),
        (x: 139.775, y: 35.685),
        (x: 139.765, y: 35.685),
        (x: 139.765, y: 35.675)
    ];
    let result = check_polygon_collision(&query, &zones);

    assert!(result.is_colliding);
    assert!(result.overlap_area > 0.0);
    // Query lies entirely inside the DID
    assert!((result.overlap_ratio - 1.0).abs() < 1e-6);
    assert_eq!(result.severity, Severity::Warning);
}

#[test]
fn test_tiny_polygon_in_large_zone_ratio_within_precision() {
    // A ~1 m square inside a 5° zone: boolean-op grid snapping keeps the
    // ratio within 1e-3 of 1, not 1e-6
    let zones = ZoneCollection::new(vec![square_zone(
        "Wide",
        ZoneType::Manned,
        135.0,
        33.0,
        5.0,
    )]);
    let query = polygon![
        (x: 137.5, y: 35.5),
        (x: 137.50001, y: 35.5),
        (x: 137.50001, y: 35.50001),
        (x: 137.5, y: 35.50001),
        (x: 137.5, y: 35.5)
    ];
    let result = check_polygon_collision(&query, &zones);

    assert!(result.is_colliding);
    assert!(
        (result.overlap_ratio - 1.0).abs() < 1e-3,
        "ratio = {}",
        result.overlap_ratio
    );
}

#[test]
fn test_polygon_matching_zone_has_ratio_one() {
    let zones = tokyo_zones();
    let query = zones.zones()[0].geometry.clone();
    let result = check_polygon_collision(&query, &zones);

    assert!((result.overlap_ratio - 1.0).abs() < 1e-6);
}

#[test]
fn test_polygon_containing_zone() {
    // Query is twice as wide as the DID and centred on it
    let zones = tokyo_zones();
    let query = polygon![
        (x: 139.75, y: 35.67),
        (x: 139.79, y: 35.67),
        (x: 139.79, y: 35.69),
        (x: 139.75, y: 35.69),
        (x: 139.75, y: 35.67)
    ];
    let result = check_polygon_collision(&query, &zones);

    assert!(result.is_colliding);
    assert!((result.overlap_ratio - 0.5).abs() < 1e-6, "ratio = {}", result.overlap_ratio);
}

#[test]
fn test_polygon_outside_all_zones() {
    let zones = tokyo_zones();
    let query = polygon![
        (x: 140.0, y: 36.0),
        (x: 140.1, y: 36.0),
        (x: 140.1, y: 36.1),
        (x: 140.0, y: 36.1),
        (x: 140.0, y: 36.0)
    ];
    let result = check_polygon_collision(&query, &zones);

    assert!(!result.is_colliding);
    assert_eq!(result.overlap_area, 0.0);
    assert_eq!(result.overlap_ratio, 0.0);
    assert_eq!(result.severity, Severity::Safe);
}

#[test]
fn test_polygon_max_severity_across_zones() {
    let zones = tokyo_zones();
    // Spans from inside the DID down into the airport zone
    let query = polygon![
        (x: 139.77, y: 35.58),
        (x: 139.775, y: 35.58),
        (x: 139.775, y: 35.68),
        (x: 139.77, y: 35.68),
        (x: 139.77, y: 35.58)
    ];
    let result = check_polygon_collision(&query, &zones);

    assert!(result.is_colliding);
    assert_eq!(result.severity, Severity::Danger);
    assert!(result.message.contains("Haneda Airport"));
}

#[test]
fn test_empty_zones_are_safe_for_all_queries() {
    let empty = ZoneCollection::default();
    let point = coord! { x: 139.77, y: 35.68 };

    assert_eq!(check_waypoint_collision(point, &empty).severity, Severity::Safe);
    assert_eq!(
        check_polygon_collision(&tokyo_zones().zones()[0].geometry, &empty).severity,
        Severity::Safe
    );
}
