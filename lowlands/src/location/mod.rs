//! Areas of interest ("locations") submitted by users.
//!
//! [`LocationService`] validates submitted geometries with [`GeometryValidator`] and hands valid ones, converted to
//! WGS84, to a [`LocationStore`]. Nothing is written if the geometry has any defect.

mod store;

pub use store::{InMemoryLocationStore, LocationStore};

use lowlands_types::geo::Crs;
use serde::{Deserialize, Serialize};

use crate::error::LocationError;
use crate::settings::Settings;
use crate::validation::{GeometryValidator, ValidatedGeometry};

/// Largest allowed page size of [`LocationService::list`].
pub const MAX_PAGE_SIZE: usize = 100;

/// Request to create a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    /// Name of the location.
    pub name: String,
    /// GeoJSON geometry object, `Polygon` or `MultiPolygon`.
    pub geometry: serde_json::Value,
    /// Coordinate system of the geometry.
    #[serde(default)]
    pub crs: Crs,
}

/// Validated location data passed to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Name of the location.
    pub name: String,
    /// Geometry in WGS84.
    pub geometry: geojson::Geometry,
    /// `[min_lon, min_lat, max_lon, max_lat]`.
    pub bounding_box: [f64; 4],
    /// Area in square kilometers, not rounded.
    pub area_sq_km: f64,
}

impl LocationRecord {
    /// Creates a record from a validated geometry.
    pub fn new(name: impl Into<String>, validated: &ValidatedGeometry) -> Self {
        Self {
            name: name.into(),
            geometry: geojson::Geometry::from(&validated.geometry),
            bounding_box: validated.bounding_box,
            area_sq_km: validated.area_sq_km,
        }
    }
}

/// Stored location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Id assigned by the store.
    pub id: u64,
    /// Name of the location.
    pub name: String,
    /// Geometry in WGS84.
    pub geometry: geojson::Geometry,
    /// `[min_lon, min_lat, max_lon, max_lat]`.
    pub bounding_box: [f64; 4],
    /// Area in square kilometers.
    pub area_sq_km: f64,
    /// Coordinate system of the geometry, always WGS84.
    pub crs: Crs,
}

impl Location {
    /// Creates a location from a stored record.
    pub fn from_record(id: u64, record: LocationRecord) -> Self {
        Self {
            id,
            name: record.name,
            geometry: record.geometry,
            bounding_box: record.bounding_box,
            area_sq_km: record.area_sq_km,
            crs: Crs::Wgs84,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items of the page.
    pub items: Vec<T>,
    /// Total number of items in all pages.
    pub total: usize,
    /// Page number, starting from 1.
    pub page: usize,
    /// Maximum number of items in a page.
    pub size: usize,
    /// Number of pages. Zero if there are no items at all.
    pub pages: usize,
}

/// Creates and reads locations.
pub struct LocationService<S> {
    validator: GeometryValidator,
    store: S,
}

impl<S: LocationStore> LocationService<S> {
    /// Creates a new service.
    pub fn new(settings: &Settings, store: S) -> Self {
        Self {
            validator: GeometryValidator::new(settings),
            store,
        }
    }

    /// Validator used by the service.
    pub fn validator(&self) -> &GeometryValidator {
        &self.validator
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates the geometry, converts it into WGS84 and stores it.
    ///
    /// If any problem is found, all the messages are returned as [`LocationError::Unprocessable`] and the store is
    /// not touched.
    pub fn create(&self, new_location: NewLocation) -> Result<Location, LocationError> {
        let outcome = self
            .validator
            .validate_json(&new_location.geometry, new_location.crs);

        let validated = outcome.into_validated().map_err(|errors| {
            log::warn!(
                "Location '{}' is rejected: {}",
                new_location.name,
                errors.join("; ")
            );
            LocationError::Unprocessable(errors)
        })?;

        let record = LocationRecord::new(new_location.name, &validated);
        let location = self.store.insert(record)?;
        log::info!(
            "Location '{}' is stored with id {} ({} sq km)",
            location.name,
            location.id,
            location.area_sq_km
        );

        Ok(location)
    }

    /// Returns the location with the given id.
    pub fn get(&self, id: u64) -> Result<Location, LocationError> {
        self.store.get(id)?.ok_or(LocationError::NotFound(id))
    }

    /// Returns a page of locations ordered by id. Pages are numbered from 1, `size` must be in `1..=100`.
    pub fn list(&self, page: usize, size: usize) -> Result<Page<Location>, LocationError> {
        if page < 1 {
            return Err(LocationError::InvalidPagination(format!(
                "page must be at least 1, got {page}"
            )));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(LocationError::InvalidPagination(format!(
                "size must be between 1 and {MAX_PAGE_SIZE}, got {size}"
            )));
        }

        let total = self.store.count()?;
        let offset = (page - 1).saturating_mul(size);
        let items = self.store.list(offset, size)?;

        Ok(Page {
            items,
            total,
            page,
            size,
            pages: total.div_ceil(size),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn service() -> LocationService<InMemoryLocationStore> {
        LocationService::new(&Settings::default(), InMemoryLocationStore::new())
    }

    fn new_location(name: &str) -> NewLocation {
        NewLocation {
            name: name.to_string(),
            geometry: json!({
                "type": "Polygon",
                "coordinates": [[
                    [-85.0, 55.0],
                    [-85.03, 55.0],
                    [-85.03, 55.02],
                    [-85.0, 55.02],
                    [-85.0, 55.0]
                ]]
            }),
            crs: Crs::Wgs84,
        }
    }

    #[test]
    fn create() {
        let service = service();
        let location = service.create(new_location("Test Location")).unwrap();

        assert_eq!(location.id, 1);
        assert_eq!(location.name, "Test Location");
        assert_eq!(location.crs, Crs::Wgs84);
        assert_eq!(location.bounding_box, [-85.03, 55.0, -85.0, 55.02]);
        assert_abs_diff_eq!(location.area_sq_km, 4.2734, epsilon = 1e-3);
        assert_matches!(
            location.geometry.value,
            geojson::Value::Polygon(ref rings) if rings[0].len() == 5
        );
    }

    #[test]
    fn create_stores_full_precision_area() {
        let service = service();
        let location = service.create(new_location("precise")).unwrap();
        let report = service
            .validator()
            .validate_json(&new_location("precise").geometry, Crs::Wgs84)
            .into_report();

        assert_ne!(location.area_sq_km, report.area_sq_km);
        assert_abs_diff_eq!(location.area_sq_km, report.area_sq_km, epsilon = 1e-4);
    }

    #[test]
    fn rejected_location_is_not_stored() {
        let service = service();
        let mut request = new_location("too large");
        request.geometry = json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [5.0, 0.0], [5.0, 5.0], [0.0, 5.0], [0.0, 0.0]]]
        });

        let error = service.create(request).unwrap_err();
        assert_eq!(error.status_code(), 422);
        assert_matches!(
            error,
            LocationError::Unprocessable(ref errors)
                if errors.len() == 1 && errors[0].contains("exceeds")
        );
        assert_eq!(service.store().count().unwrap(), 0);
    }

    #[test]
    fn get() {
        let service = service();
        let created = service.create(new_location("lake")).unwrap();

        assert_eq!(service.get(created.id).unwrap(), created);
        assert_matches!(service.get(99), Err(LocationError::NotFound(99)));
    }

    #[test]
    fn pagination() {
        let service = service();
        let empty = service.list(1, 10).unwrap();
        assert_eq!(empty.total, 0);
        assert_eq!(empty.pages, 0);
        assert!(empty.items.is_empty());

        for i in 0..5 {
            service.create(new_location(&format!("location {i}"))).unwrap();
        }

        let page = service.list(2, 2).unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.pages, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.size, 2);
        assert_eq!(
            page.items.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![3, 4]
        );

        assert!(service.list(4, 2).unwrap().items.is_empty());
    }

    #[test]
    fn invalid_pagination() {
        let service = service();
        assert_matches!(service.list(0, 10), Err(LocationError::InvalidPagination(_)));
        assert_matches!(service.list(1, 0), Err(LocationError::InvalidPagination(_)));
        assert_matches!(service.list(1, 101), Err(LocationError::InvalidPagination(_)));
        assert!(service.list(1, 100).is_ok());
    }

    #[test]
    fn new_location_defaults_to_wgs84() {
        let request: NewLocation = serde_json::from_value(json!({
            "name": "n",
            "geometry": {"type": "Polygon", "coordinates": []}
        }))
        .unwrap();
        assert_eq!(request.crs, Crs::Wgs84);

        let request: Result<NewLocation, _> = serde_json::from_value(json!({
            "name": "n",
            "geometry": {},
            "crs": "EPSG:32615"
        }));
        assert!(request.is_err());
    }
}
