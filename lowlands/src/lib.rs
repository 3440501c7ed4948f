//! Lowlands is the core of a catalog of geospatial raster layers. It accepts areas of interest ("locations")
//! submitted by users, checks that they are sound, converts them into WGS84 and stores them.
//!
//! # Quick start
//!
//! ```
//! use lowlands::validation::GeometryValidator;
//! use lowlands::Settings;
//! use lowlands::lowlands_types::geo::Crs;
//!
//! let validator = GeometryValidator::new(&Settings::default());
//! let geometry = serde_json::json!({
//!     "type": "Polygon",
//!     "coordinates": [[[-85.0, 55.0], [-85.03, 55.0], [-85.03, 55.02], [-85.0, 55.02], [-85.0, 55.0]]]
//! });
//!
//! let report = validator.validate_json(&geometry, Crs::Wgs84).into_report();
//! assert!(report.valid);
//! ```
//!
//! # Main components
//!
//! * [`GeometryValidator`](validation::GeometryValidator) checks a geometry and produces a
//!   [`ValidationResult`](validation::ValidationResult) listing every found defect,
//! * [`LocationService`](location::LocationService) stores valid geometries in a
//!   [`LocationStore`](location::LocationStore),
//! * [`tiles`] describes requests to the external tiling engine.
//!
//! Geometry types, projections and planar algorithms live in the [`lowlands_types`] crate.

pub mod error;
pub mod location;
mod settings;
pub mod tiles;
pub mod validation;

pub use settings::Settings;

// Reexport lowlands_types
pub use lowlands_types;
