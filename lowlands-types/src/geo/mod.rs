//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and conversion between the
//! supported coordinate systems (see [`Projection`]).

mod crs;
mod datum;
mod point;
pub mod projection;

pub use crs::Crs;
pub use datum::Datum;
pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
pub use projection::{CylindricalEqualArea, InvertedProjection, Projection, WebMercator};
