use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;
use crate::contour::Contour;
use crate::geo::Projection;

/// Polygon geometry. Polygon consists of one outer contour, and zero or more inner contours.
///
/// Inner contours represent *holes* in a polygon.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon<P> {
    /// Outer contour.
    pub outer_contour: Contour<P>,
    /// Inner contours.
    pub inner_contours: Vec<Contour<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer_contour: Contour<P>, inner_contours: Vec<Contour<P>>) -> Self {
        Self {
            outer_contour,
            inner_contours,
        }
    }

    /// Iterates over all contours of the polygon starting with the outer one.
    pub fn iter_contours(&self) -> impl Iterator<Item = &'_ Contour<P>> {
        std::iter::once(&self.outer_contour).chain(self.inner_contours.iter())
    }

    /// Projects all points of the polygon. Returns `None` if any of the points cannot be projected.
    pub fn project<Proj>(&self, projection: &Proj) -> Option<Polygon<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        Some(Polygon {
            outer_contour: self.outer_contour.project_points(projection)?,
            inner_contours: self
                .inner_contours
                .iter()
                .map(|c| c.project_points(projection))
                .collect::<Option<Vec<_>>>()?,
        })
    }

    /// Converts all points of the polygon with the given function.
    pub fn cast_points<T>(&self, mut cast: impl FnMut(&P) -> T) -> Polygon<T> {
        Polygon {
            outer_contour: self.outer_contour.cast_points(&mut cast),
            inner_contours: self
                .inner_contours
                .iter()
                .map(|c| c.cast_points(&mut cast))
                .collect(),
        }
    }
}

impl<P: CartesianPoint2d> Polygon<P> {
    /// Planar area of the polygon: the area of the outer contour minus the areas of the holes. Orientation of the
    /// contours does not matter.
    pub fn area(&self) -> f64 {
        let holes: f64 = self
            .inner_contours
            .iter()
            .map(|c| c.area_signed().abs())
            .sum();
        self.outer_contour.area_signed().abs() - holes
    }
}

impl<P> From<Contour<P>> for Polygon<P> {
    fn from(value: Contour<P>) -> Self {
        Self {
            outer_contour: value,
            inner_contours: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;

    fn ring(x: f64, y: f64, size: f64) -> Contour<Point2d> {
        Contour::new(vec![
            Point2d::new(x, y),
            Point2d::new(x + size, y),
            Point2d::new(x + size, y + size),
            Point2d::new(x, y + size),
            Point2d::new(x, y),
        ])
    }

    #[test]
    fn area_with_hole() {
        let polygon = Polygon::new(ring(0.0, 0.0, 10.0), vec![ring(2.0, 2.0, 2.0)]);
        assert_eq!(polygon.area(), 96.0);
        assert_eq!(polygon.iter_contours().count(), 2);
    }

    #[test]
    fn cast_points_keeps_structure() {
        let polygon = Polygon::new(ring(0.0, 0.0, 10.0), vec![ring(2.0, 2.0, 2.0)]);
        let cast = polygon.cast_points(|p| Point2d::new(p.x * 2.0, p.y));

        assert_eq!(cast.inner_contours.len(), 1);
        assert_eq!(cast.outer_contour.len(), 5);
        assert_eq!(cast.area(), 192.0);
    }
}
