// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Drone-Zones flight plan checker
//!
//! Loads prohibited-area GeoJSON, checks a flight plan against it and prints
//! the report as JSON on stdout.

use anyhow::Context;
use drone_zones::{config::Config, CollisionService, FlightPlan};
use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging on stderr
    init_logging();

    let plan_path = std::env::args()
        .nth(1)
        .context("usage: drone-zones <flight-plan.json>")?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        sources = config.zone_sources.len(),
        indexed = config.use_spatial_index,
        "Starting flight plan check"
    );

    let service = CollisionService::from_config(&config).context("Failed to load zone data")?;

    let plan_json = fs::read_to_string(&plan_path)
        .with_context(|| format!("Failed to read flight plan {}", plan_path))?;
    let plan: FlightPlan = serde_json::from_str(&plan_json)
        .with_context(|| format!("Failed to parse flight plan {}", plan_path))?;

    let report = service.check_flight_plan(&plan);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.has_collisions {
        tracing::warn!(
            collisions = report.collision_count,
            severity = %report.overall_severity,
            "Flight plan enters restricted airspace"
        );
    }
    Ok(())
}

/// Initialize structured JSON logging, honoring `RUST_LOG`.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("drone_zones=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
