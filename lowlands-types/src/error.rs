//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LowlandsTypesError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// Geometry of a type other than Polygon or MultiPolygon.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometryType(String),
    /// Coordinate reference system other than EPSG:4326 or EPSG:3857.
    #[error("unsupported coordinate reference system: {0}")]
    UnsupportedCrs(String),
}
