// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collision service: owns the zone data and its index, answers checks.

use crate::config::Config;
use crate::error::Result;
use crate::geometry::Position;
use crate::models::{
    FlightPlan, FlightPlanReport, PathCollisionResult, PolygonCollisionResult, SeverityTable,
    WaypointCollisionResult, WaypointReport, ZoneCollection,
};
use crate::services::evaluator::CollisionEvaluator;
use crate::services::index::{ZoneIndex, ZoneSource};
use crate::services::zones::load_zones_from_files;
use geo::Polygon;

const NO_ZONE_DATA: &str = "No prohibited area data";

/// Zones as loaded, either scanned linearly or behind an R-tree.
#[derive(Debug, Clone)]
enum ZoneStore {
    Linear(ZoneCollection),
    Indexed(ZoneIndex),
}

impl ZoneStore {
    fn new(zones: ZoneCollection, use_spatial_index: bool) -> Self {
        if use_spatial_index {
            ZoneStore::Indexed(ZoneIndex::build(zones))
        } else {
            ZoneStore::Linear(zones)
        }
    }

    fn source(&self) -> &dyn ZoneSource {
        match self {
            ZoneStore::Linear(zones) => zones,
            ZoneStore::Indexed(index) => index,
        }
    }

    fn zones(&self) -> &ZoneCollection {
        match self {
            ZoneStore::Linear(zones) => zones,
            ZoneStore::Indexed(index) => index.zones(),
        }
    }

    fn into_zones(self) -> ZoneCollection {
        match self {
            ZoneStore::Linear(zones) => zones,
            ZoneStore::Indexed(index) => index.into_zones(),
        }
    }
}

/// Service for checking waypoints, paths and areas against restricted zones.
///
/// Without zone data every check answers SAFE with a "no data" message.
#[derive(Debug, Clone)]
pub struct CollisionService {
    store: Option<ZoneStore>,
    evaluator: CollisionEvaluator,
    use_spatial_index: bool,
}

impl Default for CollisionService {
    fn default() -> Self {
        Self {
            store: None,
            evaluator: CollisionEvaluator::default(),
            use_spatial_index: true,
        }
    }
}

impl CollisionService {
    pub fn new(zones: ZoneCollection, use_spatial_index: bool, severities: SeverityTable) -> Self {
        let service = Self {
            store: Some(ZoneStore::new(zones, use_spatial_index)),
            evaluator: CollisionEvaluator::new(severities),
            use_spatial_index,
        };
        tracing::info!(
            zones = service.zone_count(),
            indexed = use_spatial_index,
            "Collision service ready"
        );
        service
    }

    /// Load all configured zone sources.
    pub fn from_config(config: &Config) -> Result<Self> {
        let zones = load_zones_from_files(config.zone_sources.as_slice())?;
        Ok(Self::new(
            zones,
            config.use_spatial_index,
            config.severities.clone(),
        ))
    }

    /// Swap in freshly loaded zones, rebuilding the index if one is used.
    pub fn replace_zones(&mut self, zones: ZoneCollection) {
        self.store = Some(ZoneStore::new(zones, self.use_spatial_index));
        tracing::info!(zones = self.zone_count(), "Zone data reloaded");
    }

    /// Drop zone data; checks answer "no data" until zones are loaded again.
    pub fn clear_zones(&mut self) -> Option<ZoneCollection> {
        self.store.take().map(ZoneStore::into_zones)
    }

    pub fn zones(&self) -> Option<&ZoneCollection> {
        self.store.as_ref().map(ZoneStore::zones)
    }

    pub fn zone_count(&self) -> usize {
        self.zones().map_or(0, ZoneCollection::len)
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self.store, Some(ZoneStore::Indexed(_)))
    }

    pub fn check_waypoint(&self, point: Position) -> WaypointCollisionResult {
        match &self.store {
            Some(store) => self.evaluator.check_waypoint(point, store.source()),
            None => WaypointCollisionResult::safe(NO_ZONE_DATA),
        }
    }

    pub fn check_path(&self, path: &[Position]) -> PathCollisionResult {
        match &self.store {
            Some(store) => self.evaluator.check_path(path, store.source()),
            None => PathCollisionResult::safe(NO_ZONE_DATA),
        }
    }

    pub fn check_polygon(&self, polygon: &Polygon<f64>) -> PolygonCollisionResult {
        match &self.store {
            Some(store) => self.evaluator.check_polygon(polygon, store.source()),
            None => PolygonCollisionResult::safe(NO_ZONE_DATA),
        }
    }

    /// Check every waypoint, then the path through them if there are two or more.
    pub fn check_flight_plan(&self, plan: &FlightPlan) -> FlightPlanReport {
        let waypoint_results = plan
            .waypoints
            .iter()
            .map(|waypoint| WaypointReport {
                waypoint_id: waypoint.id.clone(),
                result: self.check_waypoint(waypoint.position()),
            })
            .collect();

        let path_result = (plan.waypoints.len() >= 2).then(|| self.check_path(&plan.path()));

        let report = FlightPlanReport::new(waypoint_results, path_result);
        tracing::info!(
            plan = %plan.id,
            waypoints = plan.waypoints.len(),
            collisions = report.collision_count,
            severity = %report.overall_severity,
            "Checked flight plan"
        );
        report
    }
}
