use approx::assert_abs_diff_eq;
use lowlands::lowlands_types::geo::{Crs, GeoPoint};
use lowlands::validation::{GeometryError, GeometryValidator, ValidationResult};
use lowlands::Settings;
use serde_json::{json, Value};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn validate(geometry: Value) -> ValidationResult {
    init_logger();
    GeometryValidator::new(&Settings::default())
        .validate_json(&geometry, Crs::Wgs84)
        .into_report()
}

fn rect(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> Value {
    json!([
        [lon_min, lat_min],
        [lon_max, lat_min],
        [lon_max, lat_max],
        [lon_min, lat_max],
        [lon_min, lat_min]
    ])
}

#[test]
fn small_polygon_is_valid() {
    let report = validate(json!({
        "type": "Polygon",
        "coordinates": [[
            [-85.0, 55.0],
            [-85.03, 55.0],
            [-85.03, 55.02],
            [-85.0, 55.02],
            [-85.0, 55.0]
        ]]
    }));

    assert!(report.valid);
    assert_eq!(report.geometry_type, "Polygon");
    assert_eq!(report.crs, Crs::Wgs84);
    assert_eq!(report.max_area_sq_km, 1000.0);
    assert!(report.area_sq_km > 1.0 && report.area_sq_km < 20.0);
    assert!(report.errors.is_empty());
}

#[test]
fn large_polygon_exceeds_area() {
    let report = validate(json!({
        "type": "Polygon",
        "coordinates": [rect(0.0, 0.0, 5.0, 5.0)]
    }));

    assert!(!report.valid);
    assert!(report.area_sq_km > 1000.0);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("exceeds"));
    assert!(report.errors[0].starts_with("Area 307346."));
}

#[test]
fn polygon_near_limit_is_valid() {
    let report = validate(json!({
        "type": "Polygon",
        "coordinates": [rect(-85.0, 55.0, -84.3, 55.18)]
    }));

    assert!(report.valid, "{:?}", report.errors);
    assert_abs_diff_eq!(report.area_sq_km, 895.6, epsilon = 1.0);
}

#[test]
fn point_is_rejected() {
    let report = validate(json!({"type": "Point", "coordinates": [-85.0, 55.0]}));

    assert!(!report.valid);
    assert_eq!(report.area_sq_km, 0.0);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("Point"));
}

#[test]
fn line_string_is_rejected() {
    let report = validate(json!({
        "type": "LineString",
        "coordinates": [[-85.0, 55.0], [-84.0, 55.0]]
    }));

    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("LineString"));
}

#[test]
fn longitude_out_of_range() {
    let report = validate(json!({
        "type": "Polygon",
        "coordinates": [rect(200.0, 55.0, 201.0, 56.0)]
    }));

    assert!(!report.valid);
    assert!(report
        .errors
        .iter()
        .any(|e| e.contains("Longitude") && e.contains("200.0")));
    // Every point has an out-of-range longitude.
    assert_eq!(
        report
            .errors
            .iter()
            .filter(|e| e.starts_with("Longitude"))
            .count(),
        5
    );
}

#[test]
fn latitude_out_of_range() {
    let report = validate(json!({
        "type": "Polygon",
        "coordinates": [rect(0.0, 95.0, 1.0, 96.0)]
    }));

    assert!(!report.valid);
    assert!(report.errors.iter().any(|e| e.contains("Latitude")));
    assert!(!report.errors.iter().any(|e| e.contains("Longitude")));
}

#[test]
fn hole_reduces_area() {
    let outer = rect(-85.0, 55.0, -84.8, 55.1);
    let hole = rect(-84.95, 55.02, -84.9, 55.07);

    let without_hole = validate(json!({"type": "Polygon", "coordinates": [outer.clone()]}));
    let with_hole = validate(json!({"type": "Polygon", "coordinates": [outer, hole]}));

    assert!(without_hole.valid);
    assert!(with_hole.valid, "{:?}", with_hole.errors);
    assert!(with_hole.area_sq_km < without_hole.area_sq_km);
}

#[test]
fn multi_polygon_is_valid() {
    let report = validate(json!({
        "type": "MultiPolygon",
        "coordinates": [
            [rect(-85.03, 55.0, -85.0, 55.02)],
            [rect(-84.03, 55.0, -84.0, 55.02)]
        ]
    }));

    assert!(report.valid, "{:?}", report.errors);
    assert_eq!(report.geometry_type, "MultiPolygon");
    assert_abs_diff_eq!(report.area_sq_km, 2.0 * 4.2734, epsilon = 1e-2);
}

#[test]
fn overlapping_parts_are_invalid() {
    let report = validate(json!({
        "type": "MultiPolygon",
        "coordinates": [
            [rect(-85.03, 55.0, -85.0, 55.02)],
            [rect(-85.02, 55.01, -84.99, 55.03)]
        ]
    }));

    assert!(!report.valid);
    assert!(report.errors[0].starts_with("Invalid geometry: Self-intersection"));
}

#[test]
fn parts_overlapping_along_collinear_edges_are_invalid() {
    let report = validate(json!({
        "type": "MultiPolygon",
        "coordinates": [
            [rect(0.0, 0.0, 0.2, 0.2)],
            [rect(0.1, 0.0, 0.3, 0.2)]
        ]
    }));

    assert!(!report.valid);
    assert_eq!(
        report.errors,
        vec!["Invalid geometry: Self-intersection[0.1 0]"]
    );
}

#[test]
fn duplicate_parts_are_invalid() {
    let report = validate(json!({
        "type": "MultiPolygon",
        "coordinates": [
            [rect(-85.03, 55.0, -85.0, 55.02)],
            [rect(-85.03, 55.0, -85.0, 55.02)]
        ]
    }));

    assert!(!report.valid);
    assert_eq!(
        report.errors,
        vec!["Invalid geometry: Self-intersection[-85.03 55]"]
    );
}

#[test]
fn parts_sharing_an_edge_are_invalid() {
    let report = validate(json!({
        "type": "MultiPolygon",
        "coordinates": [
            [rect(0.0, 0.0, 0.1, 0.1)],
            [rect(0.1, 0.0, 0.2, 0.1)]
        ]
    }));

    assert!(!report.valid);
    assert_eq!(
        report.errors,
        vec!["Invalid geometry: Self-intersection[0.1 0]"]
    );
}

#[test]
fn parts_touching_at_a_corner_are_valid() {
    let report = validate(json!({
        "type": "MultiPolygon",
        "coordinates": [
            [rect(0.0, 0.0, 0.1, 0.1)],
            [rect(0.1, 0.1, 0.2, 0.2)]
        ]
    }));

    assert!(report.valid, "{:?}", report.errors);
}

#[test]
fn hole_equal_to_shell_is_invalid() {
    let report = validate(json!({
        "type": "Polygon",
        "coordinates": [rect(0.0, 0.0, 5.0, 5.0), rect(0.0, 0.0, 5.0, 5.0)]
    }));

    assert!(!report.valid);
    assert_eq!(report.area_sq_km, 0.0);
    assert_eq!(
        report.errors,
        vec!["Invalid geometry: Self-intersection[0 0]"]
    );
}

#[test]
fn self_intersecting_ring() {
    let report = validate(json!({
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0], [0.0, 0.0]]]
    }));

    assert!(!report.valid);
    assert_eq!(
        report.errors,
        vec!["Invalid geometry: Ring Self-intersection[1 1]"]
    );
}

#[test]
fn web_mercator_is_converted_to_wgs84() {
    init_logger();
    let geometry = json!({
        "type": "Polygon",
        "coordinates": [[
            [-9458523.0, 6982998.0],
            [-9455184.0, 6982998.0],
            [-9455184.0, 6986719.0],
            [-9458523.0, 6986719.0],
            [-9458523.0, 6982998.0]
        ]]
    });

    let outcome = GeometryValidator::default().validate_json(&geometry, Crs::WebMercator);
    assert!(outcome.is_valid(), "{:?}", outcome.report().errors);
    assert_eq!(outcome.report().crs, Crs::Wgs84);

    let converted = outcome.geometry().expect("geometry is converted");
    assert!(converted.iter_points().all(|p| (-180.0..=180.0).contains(&p.lon())
        && (-90.0..=90.0).contains(&p.lat())));
}

#[test]
fn web_mercator_out_of_range() {
    init_logger();
    let geometry = json!({
        "type": "Polygon",
        "coordinates": [rect(-30_000_000.0, 0.0, -29_000_000.0, 1_000.0)]
    });

    let outcome = GeometryValidator::default().validate_json(&geometry, Crs::WebMercator);
    assert!(!outcome.is_valid());
    assert!(outcome
        .report()
        .errors
        .iter()
        .any(|e| e.starts_with("X coordinate -30000000.0 out of range")));
}

#[test]
fn errors_are_accumulated() {
    let report = validate(json!({
        "type": "Polygon",
        "coordinates": [rect(170.0, 80.0, 200.0, 95.0)]
    }));

    assert!(!report.valid);
    let longitude_errors = report
        .errors
        .iter()
        .filter(|e| e.starts_with("Longitude"))
        .count();
    let latitude_errors = report
        .errors
        .iter()
        .filter(|e| e.starts_with("Latitude"))
        .count();
    assert_eq!(longitude_errors, 2);
    assert_eq!(latitude_errors, 2);
    assert!(report.errors.last().is_some_and(|e| e.contains("exceeds")));
}

#[test]
fn validator_is_shared_between_threads() {
    init_logger();
    let validator = GeometryValidator::default();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=8)
            .map(|i| {
                let validator = &validator;
                scope.spawn(move || {
                    let size = 0.01 * i as f64;
                    let geometry = json!({
                        "type": "Polygon",
                        "coordinates": [rect(-85.0, 55.0, -85.0 + size, 55.0 + size)]
                    });
                    validator.validate_json(&geometry, Crs::Wgs84).into_report()
                })
            })
            .collect();

        let areas: Vec<f64> = handles
            .into_iter()
            .map(|h| h.join().expect("validation does not panic").area_sq_km)
            .collect();
        assert!(areas.windows(2).all(|pair| pair[0] < pair[1]));
    });
}

#[test]
fn fatal_errors() {
    init_logger();
    let outcome = GeometryValidator::default()
        .validate_json(&json!({"type": "Polygon"}), Crs::Wgs84);
    assert!(outcome.errors().iter().all(GeometryError::is_fatal));
    assert_eq!(outcome.report().errors, vec!["Geometry must have coordinates"]);
}
