use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::marker::PhantomData;

use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::geo::datum::Datum;
use crate::geo::point::{GeoPoint, NewGeoPoint};
use crate::geo::projection::Projection;

/// Spherical Web Mercator projection (EPSG:3857).
///
/// The sphere radius is the semimajor axis of the datum.
#[derive(Debug)]
pub struct WebMercator<In, Out = Point2d> {
    datum: Datum,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> Clone for WebMercator<In, Out> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<In, Out> Copy for WebMercator<In, Out> {}

impl<In, Out> WebMercator<In, Out> {
    /// Creates the projection on the sphere of the datum's semimajor radius.
    pub const fn new(datum: Datum) -> Self {
        Self {
            datum,
            phantom_in: PhantomData,
            phantom_out: PhantomData,
        }
    }
}

impl<In, Out> Default for WebMercator<In, Out> {
    fn default() -> Self {
        Self::new(Datum::WGS84)
    }
}

impl<In: NewGeoPoint, Out: CartesianPoint2d + From<Point2d>> Projection for WebMercator<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let radius = self.datum.semimajor();
        let x = radius * input.lon_rad();
        let y = radius * (FRAC_PI_4 + input.lat_rad() / 2.0).tan().ln();

        if x.is_finite() && y.is_finite() {
            Some(Point2d::new(x, y).into())
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let radius = self.datum.semimajor();
        let lon = (input.x() / radius).to_degrees();
        let lat = (2.0 * (input.y() / radius).exp().atan() - FRAC_PI_2).to_degrees();

        if lat.is_finite() && lon.is_finite() {
            Some(In::lonlat(lon, lat))
        } else {
            None
        }
    }
}
