//! Geometry types and algorithms used to accept user-submitted areas of interest.
//!
//! The crate covers the whole life of a submitted polygon before it is stored:
//!
//! * [`Geom`] is a closed union over [`Polygon`] and [`MultiPolygon`], generic over the point type, so the same
//!   structure carries raw projected coordinates ([`cartesian::Point2d`]) and geographic ones
//!   ([`geo::GeoPoint2d`]).
//! * [`geo::Projection`] implementations convert between spherical Web Mercator, WGS84 and the World Cylindrical
//!   Equal Area projection used for area computation.
//! * [`validity`] explains why a polygon is not a valid planar geometry.
//! * [`Geom`] can be read from and written to GeoJSON through the `geojson` crate.

pub mod cartesian;
pub mod error;
pub mod geo;
pub mod segment;
pub mod validity;

mod contour;
mod geojson_conv;
mod geometry;
mod multi_polygon;
mod polygon;

pub use contour::{Contour, PointLocation};
pub use geometry::{Geom, GeometryKind};
pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
