// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Restricted zone model.

use crate::geometry::{self, BoundingBox};
use crate::models::severity::Severity;
use geo::Polygon;
use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Restriction category of a zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ZoneType {
    /// Densely inhabited district
    Did,
    /// Airport surroundings
    Airport,
    /// Emergency operations airspace
    Emergency,
    /// Manned aircraft take-off/landing area
    Manned,
    /// Remote ID designated area
    RemoteId,
    /// Small UAV prohibition act, red zone
    NoFlyRed,
    /// Small UAV prohibition act, yellow zone
    NoFlyYellow,
    /// Any other tag, stored upper-cased
    Other(String),
}

impl ZoneType {
    pub fn as_str(&self) -> &str {
        match self {
            ZoneType::Did => "DID",
            ZoneType::Airport => "AIRPORT",
            ZoneType::Emergency => "EMERGENCY",
            ZoneType::Manned => "MANNED",
            ZoneType::RemoteId => "REMOTE_ID",
            ZoneType::NoFlyRed => "NO_FLY_RED",
            ZoneType::NoFlyYellow => "NO_FLY_YELLOW",
            ZoneType::Other(tag) => tag,
        }
    }

    /// Fixed severity lookup. Unknown categories are treated as warnings.
    pub fn default_severity(&self) -> Severity {
        match self {
            ZoneType::Airport | ZoneType::Emergency | ZoneType::NoFlyRed => Severity::Danger,
            ZoneType::Did
            | ZoneType::Manned
            | ZoneType::RemoteId
            | ZoneType::NoFlyYellow
            | ZoneType::Other(_) => Severity::Warning,
        }
    }
}

impl FromStr for ZoneType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Ok(match tag.as_str() {
            "DID" => ZoneType::Did,
            "AIRPORT" => ZoneType::Airport,
            "EMERGENCY" => ZoneType::Emergency,
            "MANNED" => ZoneType::Manned,
            "REMOTE_ID" => ZoneType::RemoteId,
            "NO_FLY_RED" => ZoneType::NoFlyRed,
            "NO_FLY_YELLOW" => ZoneType::NoFlyYellow,
            _ => ZoneType::Other(tag),
        })
    }
}

impl From<&str> for ZoneType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(zone_type) => zone_type,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ZoneType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single restricted area.
///
/// The first ring of `geometry` is the outer boundary, the rest are holes.
/// Coordinates are `x = longitude`, `y = latitude` in decimal degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub name: String,
    pub zone_type: ZoneType,
    pub geometry: Polygon<f64>,
}

impl Zone {
    pub fn new(name: impl Into<String>, zone_type: ZoneType, geometry: Polygon<f64>) -> Self {
        Self {
            name: name.into(),
            zone_type,
            geometry,
        }
    }

    /// Bounding box of the outer ring, `None` for an empty ring.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        geometry::bounding_box(&self.geometry)
    }

    /// True when the outer ring has fewer than three distinct vertices.
    /// Degenerate zones never collide with anything.
    pub fn is_degenerate(&self) -> bool {
        geometry::is_degenerate(&self.geometry)
    }
}

/// Ordered collection of zones.
///
/// Order never changes *whether* something collides, but the first zone
/// matching a waypoint is the one reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneCollection {
    zones: Vec<Zone>,
}

impl ZoneCollection {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Zone> {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Append another collection, keeping both orders.
    pub fn merge(&mut self, other: ZoneCollection) {
        self.zones.extend(other.zones);
    }
}

impl From<Vec<Zone>> for ZoneCollection {
    fn from(zones: Vec<Zone>) -> Self {
        Self::new(zones)
    }
}

impl FromIterator<Zone> for ZoneCollection {
    fn from_iter<I: IntoIterator<Item = Zone>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ZoneCollection {
    type Item = &'a Zone;
    type IntoIter = std::slice::Iter<'a, Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}
