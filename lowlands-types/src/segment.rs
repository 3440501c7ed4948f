//! Straight line segments and their intersections.

use crate::cartesian::{CartesianPoint2d, Orientation, Point2d};

/// A strait line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

impl<'a, P: CartesianPoint2d> Segment<'a, P> {
    /// Returns true if both ends of the segment are the same point.
    pub fn is_degenerate(&self) -> bool {
        self.0.equal(self.1)
    }

    /// Shortest euclidian distance (squared) between a point and the segment:
    ///
    /// * if the normal from the point to the segment ends inside the segment, the returned value is the squared length
    ///   of the normal
    /// * if the normal from the point to the segment ends outside of the segment, the returned value is the smaller one
    ///   of the distances between the point and the segment's endpoints
    pub fn distance_to_point_sq(&self, point: &impl CartesianPoint2d) -> f64 {
        if self.is_degenerate() {
            return self.0.distance_sq(point);
        }

        let ds = self.1.sub(self.0);
        let dp = point.sub(self.0);
        let ds_len = ds.x * ds.x + ds.y * ds.y;

        let r = (dp.x * ds.x + dp.y * ds.y) / ds_len;
        if r <= 0.0 {
            self.0.distance_sq(point)
        } else if r >= 1.0 {
            self.1.distance_sq(point)
        } else {
            let s = (dp.y * ds.x - dp.x * ds.y) / ds_len;
            (s * s) * ds_len
        }
    }

    /// Returns true if the point lies on the segment.
    pub fn contains_point(&self, point: &impl CartesianPoint2d) -> bool {
        Orientation::triplet(self.0, point, self.1) == Orientation::Collinear
            && within_box(self.0, point, self.1)
    }

    /// Returns true, if the segment has at least one common point with the `other` segment.
    pub fn intersects<Other: CartesianPoint2d>(&self, other: &Segment<Other>) -> bool {
        self.intersection(other).is_some()
    }

    /// Returns true if the segments cross at a single point that is interior to both of them. Touching at an end
    /// point or overlapping collinear segments do not count as crossing.
    pub fn crosses<Other: CartesianPoint2d>(&self, other: &Segment<Other>) -> bool {
        let o1 = Orientation::triplet(self.0, other.0, self.1);
        let o2 = Orientation::triplet(self.0, other.1, self.1);
        let o3 = Orientation::triplet(other.0, self.0, other.1);
        let o4 = Orientation::triplet(other.0, self.1, other.1);

        [o1, o2, o3, o4]
            .iter()
            .all(|o| *o != Orientation::Collinear)
            && o1 != o2
            && o3 != o4
    }

    /// Returns a common point of the two segments, if there is one.
    ///
    /// For crossing segments this is the crossing point. For touching or overlapping segments it is one of the end
    /// points lying on the other segment.
    pub fn intersection<Other: CartesianPoint2d>(&self, other: &Segment<Other>) -> Option<Point2d> {
        let o1 = Orientation::triplet(self.0, other.0, self.1);
        let o2 = Orientation::triplet(self.0, other.1, self.1);
        let o3 = Orientation::triplet(other.0, self.0, other.1);
        let o4 = Orientation::triplet(other.0, self.1, other.1);

        if o1 == Orientation::Collinear && within_box(self.0, other.0, self.1) {
            return Some(to_point(other.0));
        }
        if o2 == Orientation::Collinear && within_box(self.0, other.1, self.1) {
            return Some(to_point(other.1));
        }
        if o3 == Orientation::Collinear && within_box(other.0, self.0, other.1) {
            return Some(to_point(self.0));
        }
        if o4 == Orientation::Collinear && within_box(other.0, self.1, other.1) {
            return Some(to_point(self.1));
        }

        if o1 != o2 && o3 != o4 {
            return crossing_point(self, other);
        }

        None
    }

    /// Returns the start of the common part of two collinear segments, if that common part is longer than a
    /// single point.
    pub fn overlap<Other: CartesianPoint2d>(&self, other: &Segment<Other>) -> Option<Point2d> {
        if self.is_degenerate() || other.is_degenerate() {
            return None;
        }

        if Orientation::triplet(self.0, other.0, self.1) != Orientation::Collinear
            || Orientation::triplet(self.0, other.1, self.1) != Orientation::Collinear
        {
            return None;
        }

        let (t_min, near, t_max) = {
            let t0 = self.parameter(other.0);
            let t1 = self.parameter(other.1);
            if t0 <= t1 {
                (t0, other.0, t1)
            } else {
                (t1, other.1, t0)
            }
        };

        if t_max.min(1.0) <= t_min.max(0.0) {
            return None;
        }

        if t_min > 0.0 {
            Some(to_point(near))
        } else {
            Some(to_point(self.0))
        }
    }

    /// Middle point of the segment.
    pub fn midpoint(&self) -> Point2d {
        self.point_at(0.5)
    }

    /// Position of the projection of `point` onto the segment line, with 0 at the start and 1 at the end.
    fn parameter(&self, point: &impl CartesianPoint2d) -> f64 {
        let ds = self.1.sub(self.0);
        let dp = point.sub(self.0);
        (dp.x * ds.x + dp.y * ds.y) / (ds.x * ds.x + ds.y * ds.y)
    }

    fn point_at(&self, t: f64) -> Point2d {
        let ds = self.1.sub(self.0);
        Point2d::new(self.0.x() + t * ds.x, self.0.y() + t * ds.y)
    }
}

fn to_point(p: &impl CartesianPoint2d) -> Point2d {
    Point2d::new(p.x(), p.y())
}

/// Checks that `q` lies inside the bounding box of the segment `p-r`.
fn within_box(
    p: &impl CartesianPoint2d,
    q: &impl CartesianPoint2d,
    r: &impl CartesianPoint2d,
) -> bool {
    q.x() <= p.x().max(r.x())
        && q.x() >= p.x().min(r.x())
        && q.y() <= p.y().max(r.y())
        && q.y() >= p.y().min(r.y())
}

fn crossing_point<A: CartesianPoint2d, B: CartesianPoint2d>(
    a: &Segment<A>,
    b: &Segment<B>,
) -> Option<Point2d> {
    let r = a.1.sub(a.0);
    let s = b.1.sub(b.0);
    let denominator = r.x * s.y - r.y * s.x;
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }

    let qp = b.0.sub(a.0);
    let t = (qp.x * s.y - qp.y * s.x) / denominator;

    Some(Point2d::new(a.0.x() + t * r.x, a.0.y() + t * r.y))
}
