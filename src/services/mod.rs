// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - zone indexing, evaluation and loading.

pub mod collision;
pub mod evaluator;
pub mod index;
pub mod zones;

pub use collision::CollisionService;
pub use evaluator::{
    check_path_collision, check_polygon_collision, check_waypoint_collision, CollisionEvaluator,
    Query,
};
pub use index::{ZoneIndex, ZoneSource};
pub use zones::{load_zones_from_file, load_zones_from_files, load_zones_from_json};
