pub use nalgebra::Point2;
use nalgebra::Vector2;

/// 2d point with `f64` coordinates.
pub type Point2d = Point2<f64>;

/// Point in a 2d cartesian space.
///
/// All coordinates in this crate come from GeoJSON documents, so the numeric type is always `f64`.
pub trait CartesianPoint2d {
    /// X coordinate.
    fn x(&self) -> f64;
    /// Y coordinate.
    fn y(&self) -> f64;

    /// Returns true if both coordinates of the points are exactly equal.
    fn equal(&self, other: &impl CartesianPoint2d) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d) -> Vector2<f64> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidean distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d) -> f64 {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y
    }

    /// Returns true if neither coordinate is NaN or infinite.
    fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

impl CartesianPoint2d for Point2<f64> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}
