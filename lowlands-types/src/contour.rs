//! Contour is a sequence of points forming one ring of a polygon.
//!
//! Rings follow the GeoJSON convention: a closed ring repeats its first point at the end. Unlike a strict
//! `LinearRing`, a [`Contour`] can hold a sequence that is not closed, so that the defect can be reported instead of
//! being rejected while parsing. Algorithms that need a closed ring ([`Contour::iter_segments`],
//! [`Contour::area_signed`], [`Contour::locate_point`]) treat an unclosed contour as if the closing point was there.

use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Orientation};
use crate::geo::Projection;
use crate::segment::Segment;

/// Sequence of points. See module level documentation for details.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Contour<Point> {
    points: Vec<Point>,
}

impl<Point> Contour<Point> {
    /// Creates a new contour.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points of the contour, in the declared order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points, including the closing one if present.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the contour has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points of the contour.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ Point> {
        self.points.iter()
    }

    /// Project all the points of the contour with the given `projection`.
    pub fn project_points<Proj>(&self, projection: &Proj) -> Option<Contour<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = Point> + ?Sized,
    {
        let points = self
            .points
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<Proj::OutPoint>>>()?;
        Some(Contour { points })
    }

    /// Converts every point of the contour with the given function.
    pub fn cast_points<T>(&self, cast: impl FnMut(&Point) -> T) -> Contour<T> {
        Contour {
            points: self.points.iter().map(cast).collect(),
        }
    }
}

impl<P: CartesianPoint2d> Contour<P> {
    /// Whether the first and the last points of the contour are the same.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first.equal(last),
            _ => false,
        }
    }

    /// Iterates over segments of the contour. If the contour is not closed, the segment between the last and the
    /// first point is also returned.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, P>> {
        let closing = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 && !first.equal(last) => {
                Some(Segment(last, first))
            }
            _ => None,
        };

        self.points
            .windows(2)
            .map(|pair| Segment(&pair[0], &pair[1]))
            .chain(closing)
    }

    /// Area of the ring calculated with the shoelace formula. Positive for counterclockwise rings, negative for
    /// clockwise ones.
    pub fn area_signed(&self) -> f64 {
        let doubled: f64 = self
            .iter_segments()
            .map(|Segment(prev, p)| prev.x() * p.y() - p.x() * prev.y())
            .sum();

        doubled / 2.0
    }

    /// Determines where the point lies relative to the area enclosed by the contour.
    pub fn locate_point(&self, point: &impl CartesianPoint2d) -> PointLocation {
        let mut wn = 0i64;
        let y = point.y();

        for segment in self.iter_segments() {
            if segment.contains_point(point) {
                return PointLocation::Boundary;
            }

            let Segment(a, b) = segment;
            if a.y() <= y {
                if b.y() > y && Orientation::triplet(a, b, point) == Orientation::Counterclockwise
                {
                    wn += 1;
                }
            } else if b.y() <= y && Orientation::triplet(a, b, point) == Orientation::Clockwise {
                wn -= 1;
            }
        }

        if wn != 0 {
            PointLocation::Inside
        } else {
            PointLocation::Outside
        }
    }
}

/// Position of a point relative to a closed contour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointLocation {
    /// Inside the enclosed area.
    Inside,
    /// On one of the contour's segments.
    Boundary,
    /// Outside the enclosed area.
    Outside,
}

impl<P> From<Vec<P>> for Contour<P> {
    fn from(points: Vec<P>) -> Self {
        Self::new(points)
    }
}
