// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for zone loading and configuration.
//!
//! Collision evaluation itself is infallible: malformed query or zone
//! geometry produces a defined "no collision" verdict instead of an error.

/// Errors from loading prohibited-area data.
#[derive(Debug, thiserror::Error)]
pub enum ZoneError {
    #[error("Failed to read file {path}: {message}")]
    IoError { path: String, message: String },

    #[error("Failed to parse GeoJSON: {0}")]
    ParseError(String),

    #[error("Expected a GeoJSON FeatureCollection")]
    NotAFeatureCollection,

    #[error("Unsupported geometry type for zone {0} (expected Polygon or MultiPolygon)")]
    UnsupportedGeometry(String),
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

/// Result type alias for zone loading
pub type Result<T> = std::result::Result<T, ZoneError>;
