//! Conversion between [`Geom`] and `geojson` geometries.
//!
//! GeoJSON positions are read as `[x, y]` pairs. Positions with a third ordinate are accepted, the ordinate is
//! dropped.

use geojson::{PolygonType, Position, Value};

use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::contour::Contour;
use crate::error::LowlandsTypesError;
use crate::geometry::Geom;
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;

/// GeoJSON type name of the geometry value.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

impl TryFrom<&geojson::Geometry> for Geom<Point2d> {
    type Error = LowlandsTypesError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        match &value.value {
            Value::Polygon(polygon) => Ok(Geom::Polygon(convert_polygon(polygon)?)),
            Value::MultiPolygon(mp) => Ok(Geom::MultiPolygon(MultiPolygon::from(
                mp.iter()
                    .map(convert_polygon)
                    .collect::<Result<Vec<_>, _>>()?,
            ))),
            other => Err(LowlandsTypesError::UnsupportedGeometryType(
                type_name(other).to_string(),
            )),
        }
    }
}

impl TryFrom<geojson::Geometry> for Geom<Point2d> {
    type Error = LowlandsTypesError;

    fn try_from(value: geojson::Geometry) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl<P: CartesianPoint2d> From<&Geom<P>> for geojson::Geometry {
    fn from(value: &Geom<P>) -> Self {
        let value = match value {
            Geom::Polygon(polygon) => Value::Polygon(to_polygon_type(polygon)),
            Geom::MultiPolygon(mp) => {
                Value::MultiPolygon(mp.parts.iter().map(to_polygon_type).collect())
            }
        };

        geojson::Geometry::new(value)
    }
}

fn convert_position(position: &Position) -> Result<Point2d, LowlandsTypesError> {
    match position.as_slice() {
        [x, y, ..] => Ok(Point2d::new(*x, *y)),
        _ => Err(LowlandsTypesError::Conversion(
            "point must contain at least 2 dimensions".to_string(),
        )),
    }
}

fn convert_contour(ring: &[Position]) -> Result<Contour<Point2d>, LowlandsTypesError> {
    if ring.is_empty() {
        return Err(LowlandsTypesError::Conversion(
            "polygon ring must contain points".to_string(),
        ));
    }

    Ok(Contour::new(
        ring.iter()
            .map(convert_position)
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon<Point2d>, LowlandsTypesError> {
    let Some((outer, inner)) = polygon.split_first() else {
        return Err(LowlandsTypesError::Conversion(
            "polygon must contain at least one ring".to_string(),
        ));
    };

    Ok(Polygon::new(
        convert_contour(outer)?,
        inner
            .iter()
            .map(|ring| convert_contour(ring))
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

fn to_polygon_type<P: CartesianPoint2d>(polygon: &Polygon<P>) -> PolygonType {
    polygon
        .iter_contours()
        .map(|contour| contour.iter_points().map(|p| vec![p.x(), p.y()]).collect())
        .collect()
}
