// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bounding-box R-tree over a zone collection.

use crate::geometry::BoundingBox;
use crate::models::{Zone, ZoneCollection};
use rstar::{RTree, RTreeObject, AABB};

/// Where the evaluator gets candidate zones from.
///
/// Candidates are always returned in collection order, so whether they come
/// from a full scan or from the index the evaluator sees the same sequence
/// (minus zones that cannot possibly match).
pub trait ZoneSource {
    /// Zones that might touch `bbox`. A superset of the real hits.
    fn candidates(&self, bbox: &BoundingBox) -> Vec<&Zone>;

    fn is_empty(&self) -> bool;
}

/// Linear scan: every zone is a candidate.
impl ZoneSource for ZoneCollection {
    fn candidates(&self, _bbox: &BoundingBox) -> Vec<&Zone> {
        self.iter().collect()
    }

    fn is_empty(&self) -> bool {
        ZoneCollection::is_empty(self)
    }
}

/// R-tree entry: a zone's position in the collection plus its box.
#[derive(Debug, Clone)]
struct IndexedZone {
    idx: usize,
    bbox: BoundingBox,
}

impl RTreeObject for IndexedZone {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.bbox.to_aabb()
    }
}

/// Spatial index over a zone collection.
///
/// The index owns the zones it was built from, so it can never be queried
/// against a different collection. Rebuild it when the zone data reloads.
#[derive(Debug, Clone)]
pub struct ZoneIndex {
    zones: ZoneCollection,
    rtree: RTree<IndexedZone>,
}

impl ZoneIndex {
    /// Bulk-load an R-tree from each zone's outer-ring bounding box.
    /// Degenerate zones are left out; they can never collide.
    pub fn build(zones: ZoneCollection) -> Self {
        let entries: Vec<IndexedZone> = zones
            .iter()
            .enumerate()
            .filter(|(_, zone)| !zone.is_degenerate())
            .filter_map(|(idx, zone)| zone.bounding_box().map(|bbox| IndexedZone { idx, bbox }))
            .collect();

        let skipped = zones.len() - entries.len();
        if skipped > 0 {
            tracing::warn!(skipped, "Degenerate zones left out of spatial index");
        }
        tracing::debug!(indexed = entries.len(), "Built zone spatial index");

        Self {
            rtree: RTree::bulk_load(entries),
            zones,
        }
    }

    /// All zones whose bounding box intersects `bbox`, in collection order.
    pub fn query(&self, bbox: &BoundingBox) -> Vec<&Zone> {
        let mut hits: Vec<usize> = self
            .rtree
            .locate_in_envelope_intersecting(&bbox.to_aabb())
            .map(|entry| entry.idx)
            .collect();
        hits.sort_unstable();

        let zones = self.zones.zones();
        hits.into_iter().map(|idx| &zones[idx]).collect()
    }

    pub fn zones(&self) -> &ZoneCollection {
        &self.zones
    }

    /// Give the zones back, dropping the tree.
    pub fn into_zones(self) -> ZoneCollection {
        self.zones
    }

    /// Number of zones in the tree (degenerate zones excluded).
    pub fn indexed_len(&self) -> usize {
        self.rtree.size()
    }
}

impl ZoneSource for ZoneIndex {
    fn candidates(&self, bbox: &BoundingBox) -> Vec<&Zone> {
        self.query(bbox)
    }

    fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
