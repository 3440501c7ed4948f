//! Validation and transformation of submitted geometries.
//!
//! [`GeometryValidator`] runs a geometry through a fixed sequence of checks:
//!
//! 1. the geometry type must be `Polygon` or `MultiPolygon` (see [`parse_geometry`]),
//! 2. the geometry must be a valid planar geometry,
//! 3. every coordinate must be in the legal range of the input coordinate system (see [`BoundsValidator`]),
//! 4. the geometry is converted into WGS84 (see [`Reprojector`]),
//! 5. its area is computed (see [`AreaCalculator`]) and compared with the configured maximum.
//!
//! Only the first step and unreadable coordinates stop the process. All other problems are collected, so that the
//! caller gets every defect of the geometry in one report.

mod area;
mod bounds;
mod error;
mod parse;
mod reproject;

pub use area::AreaCalculator;
pub use bounds::BoundsValidator;
pub use error::{Axis, GeometryError, StructuralDefect};
pub use parse::parse_geometry;
pub use reproject::Reprojector;

use lowlands_types::cartesian::Point2d;
use lowlands_types::geo::{Crs, GeoPoint2d};
use lowlands_types::Geom;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Report of a geometry validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True if no errors were found.
    pub valid: bool,
    /// Declared type of the geometry.
    pub geometry_type: String,
    /// Coordinate system of the validated geometry. Always `EPSG:4326`.
    pub crs: Crs,
    /// Area of the geometry rounded to the configured precision.
    pub area_sq_km: f64,
    /// Largest allowed area.
    pub max_area_sq_km: f64,
    /// Messages of all the found errors, in the order of the checks.
    pub errors: Vec<String>,
}

/// Full result of running a geometry through [`GeometryValidator`].
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    report: ValidationResult,
    errors: Vec<GeometryError>,
    geometry: Option<Geom<GeoPoint2d>>,
    area_sq_km: f64,
    bounding_box: Option<[f64; 4]>,
}

impl ValidationOutcome {
    /// Report to show to the user.
    pub fn report(&self) -> &ValidationResult {
        &self.report
    }

    /// Consumes the outcome, returning the report.
    pub fn into_report(self) -> ValidationResult {
        self.report
    }

    /// Found errors.
    pub fn errors(&self) -> &[GeometryError] {
        &self.errors
    }

    /// True if no errors were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Geometry converted into WGS84. `None` if validation stopped before conversion or the conversion failed.
    ///
    /// The geometry is returned even when the outcome is not valid, but then it should not be trusted.
    pub fn geometry(&self) -> Option<&Geom<GeoPoint2d>> {
        self.geometry.as_ref()
    }

    /// Area in square kilometers, not rounded.
    pub fn area_sq_km(&self) -> f64 {
        self.area_sq_km
    }

    /// `[min_lon, min_lat, max_lon, max_lat]` envelope of the WGS84 geometry.
    pub fn bounding_box(&self) -> Option<[f64; 4]> {
        self.bounding_box
    }

    /// Returns the data to persist, or the error messages if the geometry is not valid.
    pub fn into_validated(self) -> Result<ValidatedGeometry, Vec<String>> {
        if !self.is_valid() {
            return Err(self.report.errors);
        }

        match (self.geometry, self.bounding_box) {
            (Some(geometry), Some(bounding_box)) => Ok(ValidatedGeometry {
                geometry,
                bounding_box,
                area_sq_km: self.area_sq_km,
            }),
            _ => Err(vec![StructuralDefect::Empty.to_string()]),
        }
    }

    fn rejected(geometry_type: String, error: GeometryError, max_area_sq_km: f64) -> Self {
        Self {
            report: ValidationResult {
                valid: false,
                geometry_type,
                crs: Crs::Wgs84,
                area_sq_km: 0.0,
                max_area_sq_km,
                errors: vec![error.to_string()],
            },
            errors: vec![error],
            geometry: None,
            area_sq_km: 0.0,
            bounding_box: None,
        }
    }
}

/// Valid geometry in WGS84 with its derived values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedGeometry {
    /// The geometry.
    pub geometry: Geom<GeoPoint2d>,
    /// `[min_lon, min_lat, max_lon, max_lat]`.
    pub bounding_box: [f64; 4],
    /// Area in square kilometers, not rounded.
    pub area_sq_km: f64,
}

/// Runs the validation pipeline, see [module documentation](self).
///
/// The validator does not change after creation and can be shared between threads.
#[derive(Debug, Clone)]
pub struct GeometryValidator {
    max_area_sq_km: f64,
    area_precision: u32,
    reprojector: Reprojector,
    area_calculator: AreaCalculator,
}

impl GeometryValidator {
    /// Creates a validator with the limits from the settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            max_area_sq_km: settings.max_area_sq_km,
            area_precision: settings.area_precision,
            reprojector: Reprojector::new(),
            area_calculator: AreaCalculator::new(),
        }
    }

    /// Largest allowed area in square kilometers.
    pub fn max_area_sq_km(&self) -> f64 {
        self.max_area_sq_km
    }

    /// Validates a GeoJSON geometry object given in the `crs` coordinate system.
    pub fn validate_json(&self, value: &serde_json::Value, crs: Crs) -> ValidationOutcome {
        match parse_geometry(value) {
            Ok(geometry) => self.validate(geometry, crs),
            Err(error) => {
                let geometry_type = parse::declared_type(value);
                log::debug!("Rejected {geometry_type} geometry: {error}");
                ValidationOutcome::rejected(geometry_type, error, self.max_area_sq_km)
            }
        }
    }

    /// Validates a geometry given in the `crs` coordinate system.
    pub fn validate(&self, geometry: Geom<Point2d>, crs: Crs) -> ValidationOutcome {
        let geometry_type = geometry.kind();
        let mut errors: Vec<GeometryError> = geometry
            .validity_problems()
            .into_iter()
            .map(|problem| StructuralDefect::Invalid(problem).into())
            .collect();
        log::debug!("{geometry_type} geometry has {} structural problems", errors.len());

        let bounds_errors = BoundsValidator::new(crs).check(&geometry.coordinates());
        log::debug!("{} coordinates out of {crs} range", bounds_errors.len());
        errors.extend(bounds_errors);

        let wgs84 = self.reprojector.to_wgs84(&geometry, crs);
        let area_sq_km = match &wgs84 {
            Some(wgs84) => self.area_calculator.area_sq_km(wgs84),
            None => {
                errors.push(GeometryError::ReprojectionFailed);
                0.0
            }
        };
        log::debug!("Geometry area is {area_sq_km} sq km");

        if area_sq_km > self.max_area_sq_km {
            errors.push(GeometryError::AreaExceedsMaximum {
                area_sq_km,
                max_area_sq_km: self.max_area_sq_km,
            });
        }

        let bounding_box = wgs84
            .as_ref()
            .and_then(|g| g.bounding_rect())
            .map(|rect| rect.to_array());

        ValidationOutcome {
            report: ValidationResult {
                valid: errors.is_empty(),
                geometry_type: geometry_type.to_string(),
                crs: Crs::Wgs84,
                area_sq_km: round(area_sq_km, self.area_precision),
                max_area_sq_km: self.max_area_sq_km,
                errors: errors.iter().map(|e| e.to_string()).collect(),
            },
            errors,
            geometry: wgs84,
            area_sq_km,
            bounding_box,
        }
    }
}

impl Default for GeometryValidator {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

fn round(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places.min(15) as i32);
    (value * factor).round() / factor
}
