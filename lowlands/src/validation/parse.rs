use lowlands_types::cartesian::Point2d;
use lowlands_types::error::LowlandsTypesError;
use lowlands_types::{Geom, GeometryKind};
use serde_json::Value;

use super::error::{GeometryError, StructuralDefect};

/// Reads a GeoJSON geometry object.
///
/// The `type` member is checked before anything else, so an unsupported geometry is reported as such even if its
/// coordinates are malformed. Errors returned from this function are always fatal: without coordinates there is
/// nothing to check further.
pub fn parse_geometry(value: &Value) -> Result<Geom<Point2d>, GeometryError> {
    let Some(object) = value.as_object() else {
        return Err(StructuralDefect::NotAnObject.into());
    };

    let type_name = declared_type(value);
    if GeometryKind::from_type_name(&type_name).is_none() {
        return Err(GeometryError::UnsupportedGeometryType(type_name));
    }

    let coordinates = match object.get("coordinates") {
        None | Some(Value::Null) => return Err(StructuralDefect::MissingCoordinates.into()),
        Some(coordinates) => coordinates,
    };

    if coordinates.as_array().is_some_and(|c| c.is_empty()) {
        return Err(StructuralDefect::Empty.into());
    }

    let geometry = geojson::Geometry::from_json_value(value.clone())
        .map_err(|err| StructuralDefect::Malformed(err.to_string()))?;

    let geom = Geom::try_from(&geometry).map_err(|err| match err {
        LowlandsTypesError::UnsupportedGeometryType(name) => {
            GeometryError::UnsupportedGeometryType(name)
        }
        LowlandsTypesError::Conversion(message) => StructuralDefect::Malformed(message).into(),
        other => StructuralDefect::Malformed(other.to_string()).into(),
    })?;

    if geom.is_empty() {
        return Err(StructuralDefect::Empty.into());
    }

    Ok(geom)
}

/// Value of the `type` member of the geometry as it would be shown to the user.
pub(crate) fn declared_type(value: &Value) -> String {
    match value.get("type") {
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
        None => "none".to_string(),
    }
}
