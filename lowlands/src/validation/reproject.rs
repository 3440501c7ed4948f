use lowlands_types::cartesian::{CartesianPoint2d, Point2d};
use lowlands_types::geo::{
    Crs, Datum, GeoPoint2d, InvertedProjection, NewGeoPoint, Projection, WebMercator,
};
use lowlands_types::Geom;

/// Converts input geometries into geographic WGS84 coordinates.
///
/// The projection parameters are constant, so a single instance can be shared between any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Reprojector {
    from_web_mercator: InvertedProjection<WebMercator<GeoPoint2d, Point2d>>,
}

impl Reprojector {
    /// Creates a new reprojector.
    pub const fn new() -> Self {
        Self {
            from_web_mercator: InvertedProjection::new(WebMercator::new(Datum::WGS84)),
        }
    }

    /// Returns the geometry in WGS84 coordinates, keeping polygons, rings and points in the same order.
    ///
    /// Geometries in WGS84 are copied as is. Returns `None` if some of the points have no finite geographic
    /// equivalent.
    pub fn to_wgs84(&self, geometry: &Geom<Point2d>, crs: Crs) -> Option<Geom<GeoPoint2d>> {
        match crs {
            Crs::Wgs84 => Some(geometry.cast_points(|p| GeoPoint2d::lonlat(p.x(), p.y()))),
            Crs::WebMercator => geometry.project(&self.from_web_mercator),
        }
    }

    /// Converts a single Web Mercator point.
    pub fn web_mercator_to_wgs84(&self, point: &Point2d) -> Option<GeoPoint2d> {
        self.from_web_mercator.project(point)
    }
}

impl Default for Reprojector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lowlands_types::geo::GeoPoint;
    use lowlands_types::{Contour, Polygon};

    const REPROJECTOR: Reprojector = Reprojector::new();

    fn square(x: f64, y: f64, size: f64) -> Contour<Point2d> {
        Contour::new(vec![
            Point2d::new(x, y),
            Point2d::new(x + size, y),
            Point2d::new(x + size, y + size),
            Point2d::new(x, y + size),
            Point2d::new(x, y),
        ])
    }

    #[test]
    fn known_point() {
        let point = REPROJECTOR
            .web_mercator_to_wgs84(&Point2d::new(-9458523.0, 6982998.0))
            .unwrap();
        assert_abs_diff_eq!(point.lon(), -84.967_358, epsilon = 1e-5);
        assert_abs_diff_eq!(point.lat(), 53.0, epsilon = 1e-5);
    }

    #[test]
    fn origin_and_extent() {
        let origin = REPROJECTOR
            .web_mercator_to_wgs84(&Point2d::new(0.0, 0.0))
            .unwrap();
        assert_abs_diff_eq!(origin, GeoPoint2d::latlon(0.0, 0.0), epsilon = 1e-12);

        let corner = REPROJECTOR
            .web_mercator_to_wgs84(&Point2d::new(20037508.34, 20048966.10))
            .unwrap();
        assert_abs_diff_eq!(corner.lon(), 180.0, epsilon = 1e-6);
        assert!(corner.lat() < 90.0 && corner.lat() > 85.0);
    }

    #[test]
    fn round_trip() {
        let forward = WebMercator::<GeoPoint2d, Point2d>::default();
        for (lat, lon) in [(55.0, -85.0), (-33.9, 151.2), (0.0, 0.0), (84.9, 179.99)] {
            let source = GeoPoint2d::latlon(lat, lon);
            let projected = forward.project(&source).unwrap();
            let restored = REPROJECTOR.web_mercator_to_wgs84(&projected).unwrap();
            assert_abs_diff_eq!(restored, source, epsilon = 1e-6);
        }
    }

    #[test]
    fn keeps_structure() {
        let geometry = Geom::Polygon(Polygon::new(
            square(-9_460_000.0, 6_980_000.0, 10_000.0),
            vec![square(-9_458_000.0, 6_982_000.0, 1_000.0)],
        ));

        let projected = REPROJECTOR.to_wgs84(&geometry, Crs::WebMercator).unwrap();
        assert_eq!(projected.kind(), geometry.kind());
        assert_eq!(projected.iter_contours().count(), 2);
        assert_eq!(projected.iter_points().count(), 10);
        assert!(projected
            .iter_points()
            .all(|p| (-180.0..=180.0).contains(&p.lon()) && (-90.0..=90.0).contains(&p.lat())));
    }

    #[test]
    fn wgs84_is_copied() {
        let geometry = Geom::Polygon(Polygon::from(square(-85.0, 55.0, 0.02)));
        let converted = REPROJECTOR.to_wgs84(&geometry, Crs::Wgs84).unwrap();
        assert_eq!(converted.coordinates(), geometry.coordinates());
    }

    #[test]
    fn non_finite_input() {
        let geometry = Geom::Polygon(Polygon::from(square(f64::NAN, 0.0, 1.0)));
        assert!(REPROJECTOR.to_wgs84(&geometry, Crs::WebMercator).is_none());
    }

    #[test]
    fn shared_between_threads() {
        let reprojector = Reprojector::new();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let reprojector = &reprojector;
                    scope.spawn(move || {
                        let x = -9_000_000.0 + i as f64 * 100_000.0;
                        let geometry =
                            Geom::Polygon(Polygon::from(square(x, 6_000_000.0, 1_000.0)));
                        let projected = reprojector.to_wgs84(&geometry, Crs::WebMercator).unwrap();
                        (i, projected.coordinates()[0])
                    })
                })
                .collect();

            for handle in handles {
                let (i, [lon, _]) = handle.join().unwrap();
                let expected = (-9_000_000.0 + i as f64 * 100_000.0) / Datum::WGS84.semimajor();
                assert_abs_diff_eq!(lon, expected.to_degrees(), epsilon = 1e-9);
            }
        });
    }
}
