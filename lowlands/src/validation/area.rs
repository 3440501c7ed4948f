use lowlands_types::cartesian::Point2d;
use lowlands_types::geo::{CylindricalEqualArea, GeoPoint2d};
use lowlands_types::Geom;

const SQ_M_IN_SQ_KM: f64 = 1_000_000.0;

/// Computes the area of geographic geometries on the WGS84 ellipsoid.
///
/// The geometry is projected into World Cylindrical Equal Area (EPSG:6933) and measured there with the shoelace
/// formula. Holes are subtracted, parts of multipolygons are summed.
#[derive(Debug, Clone, Copy)]
pub struct AreaCalculator {
    projection: CylindricalEqualArea<GeoPoint2d, Point2d>,
}

impl AreaCalculator {
    /// Creates a new calculator.
    pub fn new() -> Self {
        Self {
            projection: CylindricalEqualArea::world(),
        }
    }

    /// Area in square kilometers. Never NaN or infinite: a geometry that cannot be measured has zero area.
    pub fn area_sq_km(&self, geometry: &Geom<GeoPoint2d>) -> f64 {
        let Some(projected) = geometry.project(&self.projection) else {
            log::warn!("Geometry cannot be projected to equal-area coordinates, using zero area");
            return 0.0;
        };

        let area = projected.area() / SQ_M_IN_SQ_KM;
        if area.is_finite() {
            area
        } else {
            log::warn!("Area of the geometry is not a finite number ({area}), using zero area");
            0.0
        }
    }
}

impl Default for AreaCalculator {
    fn default() -> Self {
        Self::new()
    }
}
