// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use drone_zones::services::load_zones_from_json;
use drone_zones::{Zone, ZoneCollection, ZoneType};
use geo::polygon;

/// Tokyo Station DID followed by the Haneda airport zone.
pub const TOKYO_ZONES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"zoneType": "DID", "name": "Tokyo Station DID"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[139.76, 35.67], [139.78, 35.67], [139.78, 35.69], [139.76, 35.69], [139.76, 35.67]]]
            }
        },
        {
            "type": "Feature",
            "properties": {"zoneType": "AIRPORT", "name": "Haneda Airport"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[139.70, 35.55], [139.80, 35.55], [139.80, 35.60], [139.70, 35.60], [139.70, 35.55]]]
            }
        }
    ]
}"#;

/// Load the inline Tokyo fixture.
#[allow(dead_code)]
pub fn tokyo_zones() -> ZoneCollection {
    load_zones_from_json(TOKYO_ZONES).expect("Failed to parse Tokyo fixture")
}

/// Axis-aligned square zone with its south-west corner at (lng, lat).
#[allow(dead_code)]
pub fn square_zone(name: &str, zone_type: ZoneType, lng: f64, lat: f64, size: f64) -> Zone {
    Zone::new(
        name,
        zone_type,
        polygon![
            (x: lng, y: lat),
            (x: lng + size, y: lat),
            (x: lng + size, y: lat + size),
            (x: lng, y: lat + size),
            (x: lng, y: lat)
        ],
    )
}
