//! See [`Settings`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LowlandsError;

/// Process-wide configuration of the catalog core.
///
/// All fields have defaults, so a settings document only needs to contain the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Human readable name of the service.
    pub title: String,
    /// Short description of the service.
    pub description: String,
    /// Version of the service.
    pub version: String,
    /// Largest area (in square kilometers) a location may cover.
    pub max_area_sq_km: f64,
    /// Number of decimal places the area is rounded to in validation reports.
    pub area_precision: u32,
    /// Bucket that holds Cloud Optimized GeoTIFFs served through the tiling engine.
    pub s3_bucket_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "ECCC Hudson Bay Lowlands Tile Server".to_string(),
            description: "COG tile server for Hudson Bay Lowlands imagery".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            max_area_sq_km: 1000.0,
            area_precision: 4,
            s3_bucket_name: "hbl-cogs".to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, LowlandsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LowlandsError> {
        let path = path.as_ref();
        log::debug!("Loading settings from {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
