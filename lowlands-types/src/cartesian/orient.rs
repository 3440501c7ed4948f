use crate::cartesian::CartesianPoint2d;
use serde::{Deserialize, Serialize};

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    ///
    /// Triplets that produce a non-finite cross product are reported as collinear.
    pub fn triplet(
        p: &impl CartesianPoint2d,
        q: &impl CartesianPoint2d,
        r: &impl CartesianPoint2d,
    ) -> Self {
        match (q.y() - p.y()) * (r.x() - q.x()) - (q.x() - p.x()) * (r.y() - q.y()) {
            v if v > 0.0 => Self::Clockwise,
            v if v < 0.0 => Self::Counterclockwise,
            _ => Self::Collinear,
        }
    }
}
