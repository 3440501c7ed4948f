use std::marker::PhantomData;

use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::geo::datum::Datum;
use crate::geo::point::{GeoPoint, NewGeoPoint};
use crate::geo::projection::Projection;

/// Lambert cylindrical equal-area projection on an ellipsoid.
///
/// Areas measured in the projected plane equal the areas on the ellipsoid, which makes the projection suitable for
/// computing the area of geographic polygons with the planar shoelace formula.
#[derive(Debug)]
pub struct CylindricalEqualArea<In, Out = Point2d> {
    datum: Datum,
    eccentricity: f64,
    eccentricity_sq: f64,
    /// Scale factor along the standard parallel.
    k0: f64,
    /// Value of `q` at the pole.
    qp: f64,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> Clone for CylindricalEqualArea<In, Out> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<In, Out> Copy for CylindricalEqualArea<In, Out> {}

impl<In, Out> CylindricalEqualArea<In, Out> {
    /// Creates the projection with the given standard parallel (in degrees) and central meridian at 0.
    pub fn new(datum: Datum, standard_parallel: f64) -> Self {
        let eccentricity_sq = datum.eccentricity_sq();
        let eccentricity = datum.eccentricity();
        let sin_ts = standard_parallel.to_radians().sin();
        let k0 = standard_parallel.to_radians().cos()
            / (1.0 - eccentricity_sq * sin_ts * sin_ts).sqrt();

        let mut projection = Self {
            datum,
            eccentricity,
            eccentricity_sq,
            k0,
            qp: 0.0,
            phantom_in: PhantomData,
            phantom_out: PhantomData,
        };
        projection.qp = projection.q(1.0);

        projection
    }

    /// World Cylindrical Equal Area (EPSG:6933): WGS84 ellipsoid with the standard parallel at 30°.
    pub fn world() -> Self {
        Self::new(Datum::WGS84, 30.0)
    }

    fn q(&self, sin_lat: f64) -> f64 {
        let e = self.eccentricity;
        let e_sin = e * sin_lat;
        (1.0 - self.eccentricity_sq)
            * (sin_lat / (1.0 - e_sin * e_sin)
                - (1.0 / (2.0 * e)) * ((1.0 - e_sin) / (1.0 + e_sin)).ln())
    }

    /// Geodetic latitude from the authalic latitude `beta` (both in radians).
    fn latitude(&self, beta: f64) -> f64 {
        let e2 = self.eccentricity_sq;
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        beta + (e2 / 3.0 + 31.0 * e4 / 180.0 + 517.0 * e6 / 5040.0) * (2.0 * beta).sin()
            + (23.0 * e4 / 360.0 + 251.0 * e6 / 3780.0) * (4.0 * beta).sin()
            + (761.0 * e6 / 45360.0) * (6.0 * beta).sin()
    }
}

impl<In: NewGeoPoint, Out: CartesianPoint2d + From<Point2d>> Projection
    for CylindricalEqualArea<In, Out>
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let a = self.datum.semimajor();
        let x = a * self.k0 * input.lon_rad();
        let y = a * self.q(input.lat_rad().sin()) / (2.0 * self.k0);

        if x.is_finite() && y.is_finite() {
            Some(Point2d::new(x, y).into())
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let a = self.datum.semimajor();
        let sin_beta = (2.0 * self.k0 * input.y() / (a * self.qp)).clamp(-1.0, 1.0);
        let lat = self.latitude(sin_beta.asin()).to_degrees();
        let lon = (input.x() / (a * self.k0)).to_degrees();

        if lat.is_finite() && lon.is_finite() {
            Some(In::lonlat(lon, lat))
        } else {
            None
        }
    }
}
