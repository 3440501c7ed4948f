use std::fmt::{Display, Formatter};

use lowlands_types::geo::Crs;
use lowlands_types::validity::ValidityProblem;
use thiserror::Error;

/// Defect found in a submitted geometry. The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The geometry is neither a polygon nor a multipolygon. Validation stops at this error.
    #[error("Geometry type must be Polygon or MultiPolygon, got {0}")]
    UnsupportedGeometryType(String),
    /// The geometry is malformed or is not a valid planar geometry.
    #[error("{0}")]
    StructuralInvalidity(#[from] StructuralDefect),
    /// A coordinate is outside of the legal range of the input coordinate system.
    #[error("{axis} {value:?} out of range [{min}, {max}]")]
    CoordinateOutOfRange {
        /// Axis the value belongs to.
        axis: Axis,
        /// Offending value.
        value: f64,
        /// Smallest legal value.
        min: f64,
        /// Largest legal value.
        max: f64,
    },
    /// The geometry covers more than the allowed area.
    #[error("Area {area_sq_km:.2} sq km exceeds maximum allowed area of {max_area_sq_km} sq km")]
    AreaExceedsMaximum {
        /// Computed area.
        area_sq_km: f64,
        /// Configured limit.
        max_area_sq_km: f64,
    },
    /// Some of the points could not be converted into geographic coordinates.
    #[error("Geometry could not be transformed to {}", Crs::Wgs84)]
    ReprojectionFailed,
}

impl GeometryError {
    /// Returns true if no further checks can be done on the geometry after this error.
    pub fn is_fatal(&self) -> bool {
        match self {
            GeometryError::UnsupportedGeometryType(_) => true,
            GeometryError::StructuralInvalidity(defect) => defect.is_fatal(),
            _ => false,
        }
    }
}

/// Reason why a geometry is structurally unsound.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructuralDefect {
    /// The geometry is not a JSON object.
    #[error("Geometry must be a GeoJSON object")]
    NotAnObject,
    /// The geometry object has no `coordinates` member.
    #[error("Geometry must have coordinates")]
    MissingCoordinates,
    /// The geometry has no rings or no polygons.
    #[error("Geometry must not be empty")]
    Empty,
    /// Coordinates do not follow GeoJSON nesting or are not numbers.
    #[error("Invalid GeoJSON geometry: {0}")]
    Malformed(String),
    /// Coordinates were read, but they do not form a valid planar geometry.
    #[error("Invalid geometry: {0}")]
    Invalid(ValidityProblem),
}

impl StructuralDefect {
    /// Returns true if coordinates cannot be extracted from a geometry with this defect.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, StructuralDefect::Invalid(_))
    }
}

/// Coordinate axis, named the way it is called in the coordinate system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First axis of geographic coordinates.
    Longitude,
    /// Second axis of geographic coordinates.
    Latitude,
    /// First axis of projected coordinates.
    X,
    /// Second axis of projected coordinates.
    Y,
}

impl Axis {
    /// First and second axes of the coordinate system.
    pub fn of(crs: Crs) -> (Axis, Axis) {
        match crs {
            Crs::Wgs84 => (Axis::Longitude, Axis::Latitude),
            Crs::WebMercator => (Axis::X, Axis::Y),
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Axis::Longitude => "Longitude",
            Axis::Latitude => "Latitude",
            Axis::X => "X coordinate",
            Axis::Y => "Y coordinate",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lowlands_types::validity::ProblemLocation;

    #[test]
    fn messages() {
        assert_eq!(
            GeometryError::UnsupportedGeometryType("Point".into()).to_string(),
            "Geometry type must be Polygon or MultiPolygon, got Point"
        );
        assert_eq!(
            GeometryError::CoordinateOutOfRange {
                axis: Axis::Longitude,
                value: 200.0,
                min: -180.0,
                max: 180.0
            }
            .to_string(),
            "Longitude 200.0 out of range [-180, 180]"
        );
        assert_eq!(
            GeometryError::CoordinateOutOfRange {
                axis: Axis::Y,
                value: -2.5e7,
                min: -20048966.10,
                max: 20048966.10
            }
            .to_string(),
            "Y coordinate -25000000.0 out of range [-20048966.1, 20048966.1]"
        );
        assert_eq!(
            GeometryError::AreaExceedsMaximum {
                area_sq_km: 307346.789,
                max_area_sq_km: 1000.0
            }
            .to_string(),
            "Area 307346.79 sq km exceeds maximum allowed area of 1000 sq km"
        );
        assert_eq!(
            GeometryError::ReprojectionFailed.to_string(),
            "Geometry could not be transformed to EPSG:4326"
        );
    }

    #[test]
    fn structural_messages() {
        let problem = ValidityProblem::RingSelfIntersection(ProblemLocation { x: 1.0, y: 1.0 });
        assert_eq!(
            GeometryError::from(StructuralDefect::Invalid(problem)).to_string(),
            "Invalid geometry: Ring Self-intersection[1 1]"
        );
        assert_eq!(
            GeometryError::from(StructuralDefect::MissingCoordinates).to_string(),
            "Geometry must have coordinates"
        );
    }

    #[test]
    fn fatality() {
        assert!(GeometryError::UnsupportedGeometryType("Point".into()).is_fatal());
        assert!(GeometryError::from(StructuralDefect::Empty).is_fatal());
        assert!(!GeometryError::from(StructuralDefect::Invalid(
            ValidityProblem::RingNotClosed(ProblemLocation { x: 0.0, y: 0.0 })
        ))
        .is_fatal());
        assert!(!GeometryError::ReprojectionFailed.is_fatal());
    }
}
