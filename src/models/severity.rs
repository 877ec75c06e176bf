// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Severity classification for collision verdicts.

use crate::models::zone::ZoneType;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// How serious a collision is. Ordered `Safe < Warning < Danger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Safe,
    Warning,
    Danger,
}

impl Severity {
    /// Indicator color used by the map UI.
    pub fn ui_color(self) -> &'static str {
        match self {
            Severity::Safe => "#00FF00",
            Severity::Warning => "#FFA500",
            Severity::Danger => "#FF0000",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Safe => "SAFE",
            Severity::Warning => "WARNING",
            Severity::Danger => "DANGER",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown severity: {0}")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SAFE" => Ok(Severity::Safe),
            "WARNING" => Ok(Severity::Warning),
            "DANGER" => Ok(Severity::Danger),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

/// Zone type → severity lookup.
///
/// Starts from [`ZoneType::default_severity`] and applies caller overrides
/// on top, so deployments can e.g. escalate `MANNED` areas to `DANGER`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeverityTable {
    overrides: HashMap<ZoneType, Severity>,
}

impl SeverityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the severity for one zone type.
    pub fn with_override(mut self, zone_type: ZoneType, severity: Severity) -> Self {
        self.overrides.insert(zone_type, severity);
        self
    }

    pub fn severity_for(&self, zone_type: &ZoneType) -> Severity {
        self.overrides
            .get(zone_type)
            .copied()
            .unwrap_or_else(|| zone_type.default_severity())
    }

    pub fn overrides(&self) -> &HashMap<ZoneType, Severity> {
        &self.overrides
    }
}
