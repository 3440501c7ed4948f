//! Planar validity checks for polygons.
//!
//! A polygon is valid when all of its rings are closed, have at least three distinct vertices, do not cross or touch
//! themselves, holes lie inside the shell and do not cross it, and parts of a multipolygon neither overlap nor nest
//! inside each other. Every check reports the first offending point it finds so that the explanation can point the
//! user to the defect.

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::cartesian::{CartesianPoint2d, Orientation, Point2d};
use crate::contour::{Contour, PointLocation};
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;
use crate::segment::Segment;

/// Point where a validity problem was detected.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProblemLocation {
    /// X coordinate (longitude for geographic geometries).
    pub x: f64,
    /// Y coordinate (latitude for geographic geometries).
    pub y: f64,
}

impl ProblemLocation {
    fn of(point: &impl CartesianPoint2d) -> Self {
        Self {
            x: point.x(),
            y: point.y(),
        }
    }
}

impl Display for ProblemLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {}]", self.x, self.y)
    }
}

/// Reason why a geometry is not valid.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ValidityProblem {
    /// The first and the last points of a ring differ.
    #[error("Ring not closed{0}")]
    RingNotClosed(ProblemLocation),
    /// A ring has less than three distinct vertices.
    #[error("Too few points in geometry component{0}")]
    TooFewPoints(ProblemLocation),
    /// A ring touches or crosses itself.
    #[error("Ring Self-intersection{0}")]
    RingSelfIntersection(ProblemLocation),
    /// Two rings of the geometry cross each other.
    #[error("Self-intersection{0}")]
    SelfIntersection(ProblemLocation),
    /// A hole is not inside the outer contour of its polygon.
    #[error("Hole lies outside shell{0}")]
    HoleOutsideShell(ProblemLocation),
    /// A hole lies inside another hole of the same polygon.
    #[error("Holes are nested{0}")]
    NestedHoles(ProblemLocation),
    /// A part of a multipolygon lies inside another part.
    #[error("Nested shells{0}")]
    NestedShells(ProblemLocation),
}

impl ValidityProblem {
    /// Point where the problem was detected.
    pub fn location(&self) -> ProblemLocation {
        match self {
            ValidityProblem::RingNotClosed(l)
            | ValidityProblem::TooFewPoints(l)
            | ValidityProblem::RingSelfIntersection(l)
            | ValidityProblem::SelfIntersection(l)
            | ValidityProblem::HoleOutsideShell(l)
            | ValidityProblem::NestedHoles(l)
            | ValidityProblem::NestedShells(l) => *l,
        }
    }
}

/// Checks a single ring. Rings without points are reported as having too few points at the origin.
pub fn check_contour<P: CartesianPoint2d>(contour: &Contour<P>) -> Vec<ValidityProblem> {
    let mut problems = vec![];

    let (Some(first), Some(last)) = (contour.points().first(), contour.points().last()) else {
        problems.push(ValidityProblem::TooFewPoints(ProblemLocation { x: 0.0, y: 0.0 }));
        return problems;
    };

    if !contour.is_closed() {
        problems.push(ValidityProblem::RingNotClosed(ProblemLocation::of(last)));
    }

    let vertices = distinct_vertices(contour);
    if vertices.len() < 3 {
        problems.push(ValidityProblem::TooFewPoints(ProblemLocation::of(first)));
        return problems;
    }

    if let Some(location) = ring_self_intersection(&vertices) {
        problems.push(ValidityProblem::RingSelfIntersection(location));
    }

    problems
}

/// Checks all rings of the polygon and their relative position.
pub fn check_polygon<P: CartesianPoint2d>(polygon: &Polygon<P>) -> Vec<ValidityProblem> {
    let mut problems: Vec<ValidityProblem> =
        polygon.iter_contours().flat_map(check_contour).collect();
    if problems
        .iter()
        .any(|p| matches!(p, ValidityProblem::TooFewPoints(_)))
    {
        return problems;
    }

    let contours: Vec<&Contour<P>> = polygon.iter_contours().collect();
    if let Some(location) = boundary_contact(&contours, &contours) {
        problems.push(ValidityProblem::SelfIntersection(location));
    }

    let shell = &polygon.outer_contour;
    for hole in &polygon.inner_contours {
        if let Some(p) =
            sample_points(hole).find(|p| shell.locate_point(p) == PointLocation::Outside)
        {
            problems.push(ValidityProblem::HoleOutsideShell(ProblemLocation::of(&p)));
        }
    }

    for (i, outer_hole) in polygon.inner_contours.iter().enumerate() {
        for (j, inner_hole) in polygon.inner_contours.iter().enumerate() {
            if i == j {
                continue;
            }

            if let Some(p) = sample_points(inner_hole)
                .find(|p| outer_hole.locate_point(p) == PointLocation::Inside)
            {
                problems.push(ValidityProblem::NestedHoles(ProblemLocation::of(&p)));
            }
        }
    }

    problems
}

/// Checks every part of the multipolygon and verifies that the parts do not overlap.
pub fn check_multi_polygon<P: CartesianPoint2d>(
    multi_polygon: &MultiPolygon<P>,
) -> Vec<ValidityProblem> {
    let mut problems: Vec<ValidityProblem> =
        multi_polygon.parts.iter().flat_map(check_polygon).collect();
    if problems
        .iter()
        .any(|p| matches!(p, ValidityProblem::TooFewPoints(_)))
    {
        return problems;
    }

    let parts = multi_polygon.parts();
    for (i, a) in parts.iter().enumerate() {
        for b in &parts[i + 1..] {
            let a_contours: Vec<&Contour<P>> = a.iter_contours().collect();
            let b_contours: Vec<&Contour<P>> = b.iter_contours().collect();
            if let Some(location) = boundary_contact(&a_contours, &b_contours) {
                problems.push(ValidityProblem::SelfIntersection(location));
                continue;
            }

            if let Some(location) = nested_shell(a, b).or_else(|| nested_shell(b, a)) {
                problems.push(ValidityProblem::NestedShells(location));
            }
        }
    }

    problems
}

/// Vertices of the ring with consecutive duplicates and the closing point removed.
fn distinct_vertices<P: CartesianPoint2d>(contour: &Contour<P>) -> Vec<&P> {
    let mut vertices: Vec<&P> = Vec::with_capacity(contour.len());
    for p in contour.iter_points() {
        if vertices.last().map_or(true, |last| !last.equal(p)) {
            vertices.push(p);
        }
    }

    while vertices.len() > 1 && vertices[0].equal(vertices[vertices.len() - 1]) {
        vertices.pop();
    }

    vertices
}

fn ring_self_intersection<P: CartesianPoint2d>(vertices: &[&P]) -> Option<ProblemLocation> {
    let n = vertices.len();

    // Adjacent segments can only meet at their common vertex, unless the ring folds back on itself.
    for k in 0..n {
        let prev = vertices[(k + n - 1) % n];
        let current = vertices[k];
        let next = vertices[(k + 1) % n];

        let incoming = current.sub(prev);
        let outgoing = next.sub(current);
        if Orientation::triplet(prev, current, next) == Orientation::Collinear
            && incoming.dot(&outgoing) < 0.0
        {
            return Some(ProblemLocation::of(current));
        }
    }

    for i in 0..n {
        let first = Segment(vertices[i], vertices[(i + 1) % n]);
        for j in i + 2..n {
            if i == 0 && j == n - 1 {
                continue;
            }

            let second = Segment(vertices[j], vertices[(j + 1) % n]);
            if let Some(p) = first.intersection(&second) {
                return Some(ProblemLocation::of(&p));
            }
        }
    }

    None
}

/// First point where a contour from `a` crosses a different contour from `b` or shares a stretch of boundary
/// with it.
fn boundary_contact<P: CartesianPoint2d>(
    a: &[&Contour<P>],
    b: &[&Contour<P>],
) -> Option<ProblemLocation> {
    for first in a {
        for second in b {
            if std::ptr::eq(*first, *second) {
                continue;
            }

            for s1 in first.iter_segments() {
                for s2 in second.iter_segments() {
                    if s1.crosses(&s2) {
                        return s1.intersection(&s2).map(|p| ProblemLocation::of(&p));
                    }
                    if let Some(p) = s1.overlap(&s2) {
                        return Some(ProblemLocation::of(&p));
                    }
                }
            }
        }
    }

    None
}

/// Vertices of the contour followed by the midpoints of its segments.
///
/// A ring whose vertices all lie on the boundary of another ring can still run through its interior, so the
/// midpoints are checked too.
fn sample_points<P: CartesianPoint2d>(contour: &Contour<P>) -> impl Iterator<Item = Point2d> + '_ {
    contour
        .iter_points()
        .map(|p| Point2d::new(p.x(), p.y()))
        .chain(contour.iter_segments().map(|s| s.midpoint()))
}

/// A sample point of the shell of `inner` that lies inside `outer`, but not inside one of its holes.
fn nested_shell<P: CartesianPoint2d>(
    outer: &Polygon<P>,
    inner: &Polygon<P>,
) -> Option<ProblemLocation> {
    sample_points(&inner.outer_contour)
        .find(|p| {
            outer.outer_contour.locate_point(p) == PointLocation::Inside
                && !outer
                    .inner_contours
                    .iter()
                    .any(|hole| hole.locate_point(p) != PointLocation::Outside)
        })
        .map(|p| ProblemLocation::of(&p))
}
