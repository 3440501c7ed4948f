use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, Rect};
use crate::contour::Contour;
use crate::geo::Projection;
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;
use crate::validity::{self, ValidityProblem};

/// Areal geometry accepted by the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geom<P> {
    /// A single polygon.
    Polygon(Polygon<P>),
    /// A set of polygons.
    MultiPolygon(MultiPolygon<P>),
}

/// Type tag of a [`Geom`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryKind {
    /// See [`Geom::Polygon`].
    Polygon,
    /// See [`Geom::MultiPolygon`].
    MultiPolygon,
}

impl GeometryKind {
    /// GeoJSON type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
        }
    }

    /// Parses a GeoJSON type name. Returns `None` for any type other than `Polygon` and `MultiPolygon`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "Polygon" => Some(GeometryKind::Polygon),
            "MultiPolygon" => Some(GeometryKind::MultiPolygon),
            _ => None,
        }
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<P> Geom<P> {
    /// Type tag of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geom::Polygon(_) => GeometryKind::Polygon,
            Geom::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// Iterates over the polygons of the geometry in declared order.
    pub fn iter_polygons(&self) -> impl Iterator<Item = &'_ Polygon<P>> {
        match self {
            Geom::Polygon(polygon) => std::slice::from_ref(polygon).iter(),
            Geom::MultiPolygon(multi_polygon) => multi_polygon.parts.iter(),
        }
    }

    /// Iterates over every ring of every polygon in declared order.
    pub fn iter_contours(&self) -> impl Iterator<Item = &'_ Contour<P>> {
        self.iter_polygons().flat_map(|p| p.iter_contours())
    }

    /// Iterates over every point of every ring of every polygon in declared order. Repeated points (including the
    /// closing point of each ring) are not removed.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.iter_contours().flat_map(|c| c.iter_points())
    }

    /// Returns true if the geometry has no points at all.
    pub fn is_empty(&self) -> bool {
        self.iter_points().next().is_none()
    }

    /// Projects the geometry, keeping the number and the order of polygons, rings and points. Returns `None` if any
    /// of the points cannot be projected.
    pub fn project<Proj>(&self, projection: &Proj) -> Option<Geom<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = P> + ?Sized,
    {
        Some(match self {
            Geom::Polygon(polygon) => Geom::Polygon(polygon.project(projection)?),
            Geom::MultiPolygon(multi_polygon) => {
                Geom::MultiPolygon(multi_polygon.project(projection)?)
            }
        })
    }

    /// Converts all points with the given function.
    pub fn cast_points<T>(&self, cast: impl FnMut(&P) -> T) -> Geom<T> {
        match self {
            Geom::Polygon(polygon) => Geom::Polygon(polygon.cast_points(cast)),
            Geom::MultiPolygon(multi_polygon) => {
                Geom::MultiPolygon(multi_polygon.cast_points(cast))
            }
        }
    }
}

impl<P: CartesianPoint2d> Geom<P> {
    /// Flat list of `[x, y]` pairs of all the points of the geometry, see [`Geom::iter_points`].
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.iter_points().map(|p| [p.x(), p.y()]).collect()
    }

    /// Envelope of all the points of the geometry. `None` for an empty geometry.
    pub fn bounding_rect(&self) -> Option<Rect> {
        Rect::from_points(self.iter_points())
    }

    /// Planar area of the geometry in the units of its coordinates.
    pub fn area(&self) -> f64 {
        match self {
            Geom::Polygon(polygon) => polygon.area(),
            Geom::MultiPolygon(multi_polygon) => multi_polygon.area(),
        }
    }

    /// Explains why the geometry is not a valid planar geometry. Empty list means the geometry is valid.
    pub fn validity_problems(&self) -> Vec<ValidityProblem> {
        match self {
            Geom::Polygon(polygon) => validity::check_polygon(polygon),
            Geom::MultiPolygon(multi_polygon) => validity::check_multi_polygon(multi_polygon),
        }
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}
