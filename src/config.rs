// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Configuration loaded from environment variables.

use crate::error::ConfigError;
use crate::models::{Severity, SeverityTable, ZoneType};
use std::env;
use std::path::PathBuf;

/// Checker configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GeoJSON files with prohibited areas, merged in order
    pub zone_sources: Vec<PathBuf>,
    /// Build an R-tree over the zones instead of scanning them
    pub use_spatial_index: bool,
    /// Zone type → severity, defaults plus overrides
    pub severities: SeverityTable,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            zone_sources: Vec::new(),
            use_spatial_index: true,
            severities: SeverityTable::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `ZONE_SOURCES` (required): comma-separated GeoJSON paths
    /// - `USE_SPATIAL_INDEX`: `true`/`false`, default `true`
    /// - `SEVERITY_OVERRIDES`: e.g. `MANNED=DANGER,DID=DANGER`
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let zone_sources = env::var("ZONE_SOURCES")
            .map_err(|_| ConfigError::Missing("ZONE_SOURCES"))?;

        Ok(Self {
            zone_sources: parse_sources(&zone_sources)?,
            use_spatial_index: match env::var("USE_SPATIAL_INDEX") {
                Ok(v) => parse_bool("USE_SPATIAL_INDEX", &v)?,
                Err(_) => true,
            },
            severities: parse_severity_overrides(
                &env::var("SEVERITY_OVERRIDES").unwrap_or_default(),
            )?,
        })
    }
}

fn parse_sources(value: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let sources: Vec<PathBuf> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect();

    if sources.is_empty() {
        return Err(ConfigError::Invalid {
            name: "ZONE_SOURCES",
            message: "no paths given".to_string(),
        });
    }
    Ok(sources)
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            name,
            message: format!("expected a boolean, got {:?}", other),
        }),
    }
}

/// Parse `TYPE=SEVERITY` pairs into a severity table.
pub fn parse_severity_overrides(value: &str) -> Result<SeverityTable, ConfigError> {
    let mut table = SeverityTable::new();

    for pair in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (zone_type, severity) = pair.split_once('=').ok_or_else(|| ConfigError::Invalid {
            name: "SEVERITY_OVERRIDES",
            message: format!("expected TYPE=SEVERITY, got {:?}", pair),
        })?;

        let severity: Severity = severity.parse().map_err(|e| ConfigError::Invalid {
            name: "SEVERITY_OVERRIDES",
            message: format!("{}", e),
        })?;

        table = table.with_override(ZoneType::from(zone_type), severity);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set env vars for test
        env::set_var("ZONE_SOURCES", "data/did.geojson, data/airports.geojson");
        env::set_var("USE_SPATIAL_INDEX", "false");
        env::set_var("SEVERITY_OVERRIDES", "manned=danger");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(
            config.zone_sources,
            vec![
                PathBuf::from("data/did.geojson"),
                PathBuf::from("data/airports.geojson")
            ]
        );
        assert!(!config.use_spatial_index);
        assert_eq!(
            config.severities.severity_for(&ZoneType::Manned),
            Severity::Danger
        );
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(parse_bool("X", "maybe").is_err());
    }

    #[test]
    fn test_parse_sources_rejects_empty() {
        assert!(parse_sources(" , ").is_err());
    }

    #[test]
    fn test_parse_severity_overrides() {
        let table = parse_severity_overrides("DID=DANGER, remote_id = safe").unwrap();
        assert_eq!(table.severity_for(&ZoneType::Did), Severity::Danger);
        assert_eq!(table.severity_for(&ZoneType::RemoteId), Severity::Safe);
        assert_eq!(table.severity_for(&ZoneType::Airport), Severity::Danger);

        assert!(parse_severity_overrides("").unwrap().overrides().is_empty());
        assert!(parse_severity_overrides("DID").is_err());
        assert!(parse_severity_overrides("DID=EXTREME").is_err());
    }
}
