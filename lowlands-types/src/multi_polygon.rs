use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;
use crate::geo::Projection;
use crate::polygon::Polygon;

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPolygon<P> {
    /// Inner polygons.
    pub parts: Vec<Polygon<P>>,
}

impl<P> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        Self { parts }
    }
}

impl<P> MultiPolygon<P> {
    /// Returns reference to the inner polygons.
    pub fn parts(&self) -> &[Polygon<P>] {
        &self.parts
    }

    /// Projects all the polygons. Returns `None` if any of the points cannot be projected.
    pub fn project<Proj>(&self, projection: &Proj) -> Option<MultiPolygon<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        Some(MultiPolygon {
            parts: self
                .parts
                .iter()
                .map(|p| p.project(projection))
                .collect::<Option<Vec<_>>>()?,
        })
    }

    /// Converts all points with the given function.
    pub fn cast_points<T>(&self, mut cast: impl FnMut(&P) -> T) -> MultiPolygon<T> {
        MultiPolygon {
            parts: self.parts.iter().map(|p| p.cast_points(&mut cast)).collect(),
        }
    }
}

impl<P: CartesianPoint2d> MultiPolygon<P> {
    /// Sum of the planar areas of the parts.
    pub fn area(&self) -> f64 {
        self.parts.iter().map(Polygon::area).sum()
    }
}
