// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Loading prohibited-area GeoJSON into zone collections.

use crate::error::{Result, ZoneError};
use crate::models::{Zone, ZoneCollection, ZoneType};
use geo::{MultiPolygon, Polygon};
use geojson::{Feature, GeoJson};
use std::fs;
use std::path::Path;

/// Load zones from a GeoJSON file.
pub fn load_zones_from_file<P: AsRef<Path>>(path: P) -> Result<ZoneCollection> {
    let path = path.as_ref();
    let json_data = fs::read_to_string(path).map_err(|e| ZoneError::IoError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let zones = load_zones_from_json(&json_data)?;
    tracing::info!(path = %path.display(), count = zones.len(), "Loaded zones");
    Ok(zones)
}

/// Load and merge several GeoJSON files, keeping file order.
pub fn load_zones_from_files<P: AsRef<Path>>(paths: &[P]) -> Result<ZoneCollection> {
    let mut merged = ZoneCollection::default();
    for path in paths {
        merged.merge(load_zones_from_file(path)?);
    }
    Ok(merged)
}

/// Load zones from a GeoJSON string.
///
/// Each feature needs a Polygon or MultiPolygon geometry. A MultiPolygon
/// becomes one zone per member polygon. Features without geometry are
/// skipped.
pub fn load_zones_from_json(json_data: &str) -> Result<ZoneCollection> {
    let geojson: GeoJson = json_data
        .parse()
        .map_err(|e: geojson::Error| ZoneError::ParseError(e.to_string()))?;

    let features = match geojson {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => return Err(ZoneError::NotAFeatureCollection),
    };

    let mut zones = Vec::with_capacity(features.len());
    for feature in features {
        zones.extend(feature_to_zones(feature)?);
    }
    Ok(ZoneCollection::new(zones))
}

fn feature_to_zones(feature: Feature) -> Result<Vec<Zone>> {
    let name = feature
        .property("name")
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown")
        .to_string();

    let zone_type = feature
        .property("zoneType")
        .or_else(|| feature.property("type"))
        .and_then(|v| v.as_str())
        .map(ZoneType::from)
        .unwrap_or_else(|| ZoneType::Other("UNKNOWN".to_string()));

    let Some(geometry) = feature.geometry else {
        tracing::debug!(name = %name, "Skipping feature without geometry");
        return Ok(Vec::new());
    };

    let polygons = convert_geometry(geometry.value, &name)?;
    Ok(polygons
        .into_iter()
        .map(|polygon| Zone::new(name.clone(), zone_type.clone(), polygon))
        .collect())
}

fn convert_geometry(value: geojson::Value, name: &str) -> Result<Vec<Polygon<f64>>> {
    let parse_error = |e: geojson::Error| ZoneError::ParseError(format!("{}: {}", name, e));

    match value {
        geojson::Value::Polygon(_) => {
            let polygon: Polygon<f64> = value.try_into().map_err(parse_error)?;
            Ok(vec![polygon])
        }
        geojson::Value::MultiPolygon(_) => {
            let multi: MultiPolygon<f64> = value.try_into().map_err(parse_error)?;
            Ok(multi.0)
        }
        _ => Err(ZoneError::UnsupportedGeometry(name.to_string())),
    }
}
