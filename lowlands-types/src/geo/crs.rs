use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cartesian::Rect;
use crate::error::LowlandsTypesError;

/// Coordinate reference system of an input geometry.
///
/// Only two systems are supported. Everything that is stored is in [`Crs::Wgs84`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crs {
    /// Geographic longitude/latitude on the WGS84 ellipsoid, in degrees.
    #[default]
    #[serde(rename = "EPSG:4326")]
    Wgs84,
    /// Spherical Web Mercator, in meters.
    #[serde(rename = "EPSG:3857")]
    WebMercator,
}

impl Crs {
    /// `EPSG:<code>` identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Crs::Wgs84 => "EPSG:4326",
            Crs::WebMercator => "EPSG:3857",
        }
    }

    /// Range of legal coordinate values. The first axis is longitude or X, the second one is latitude or Y.
    pub fn valid_bounds(&self) -> Rect {
        match self {
            Crs::Wgs84 => Rect::new(-180.0, -90.0, 180.0, 90.0),
            Crs::WebMercator => Rect::new(-20037508.34, -20048966.10, 20037508.34, 20048966.10),
        }
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Crs {
    type Err = LowlandsTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EPSG:4326" => Ok(Crs::Wgs84),
            "EPSG:3857" => Ok(Crs::WebMercator),
            other => Err(LowlandsTypesError::UnsupportedCrs(other.to_string())),
        }
    }
}
