//! Conversion of points between coordinate systems.

mod equal_area;
mod web_mercator;

pub use equal_area::CylindricalEqualArea;
pub use web_mercator::WebMercator;

/// Converts points from one coordinate system into another.
///
/// Both directions return `None` if the result is not a finite point.
pub trait Projection {
    /// Type of the source points.
    type InPoint;
    /// Type of the projected points.
    type OutPoint;

    /// Converts a point into the target system.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts a point from the target system back into the source one.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

/// Projection that swaps the directions of the wrapped projection.
#[derive(Debug, Clone, Copy)]
pub struct InvertedProjection<P> {
    inner: P,
}

impl<P> InvertedProjection<P> {
    /// Wraps the projection.
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Projection> Projection for InvertedProjection<P> {
    type InPoint = P::OutPoint;
    type OutPoint = P::InPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        self.inner.unproject(input)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        self.inner.project(input)
    }
}
