//! This example validates a geometry stored in a `.geojson` file and prints the validation report.
//!
//! Run this example with a path to the file and, optionally, the coordinate system of the geometry:
//!
//! ```shell
//! cargo run --example validate_file -- ./lowlands/examples/data/peatland.geojson
//! cargo run --example validate_file -- ./lowlands/examples/data/peatland_3857.geojson EPSG:3857
//! ```
//!
//! The file may contain a bare geometry, a feature or a feature collection. In the last case every feature is
//! validated.

use anyhow::{anyhow, Result};
use lowlands::lowlands_types::geo::Crs;
use lowlands::validation::GeometryValidator;
use lowlands::Settings;
use serde_json::Value;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(file_name) = args.next() else {
        return Err(anyhow!(
            "This example must be run with the name of the .geojson file to validate"
        ));
    };
    let crs: Crs = match args.next() {
        Some(code) => code.parse()?,
        None => Crs::default(),
    };

    let settings = match std::env::var("LOWLANDS_SETTINGS") {
        Ok(path) => Settings::from_file(path)?,
        Err(_) => Settings::default(),
    };
    let validator = GeometryValidator::new(&settings);

    let document: Value = serde_json::from_str(&std::fs::read_to_string(&file_name)?)?;
    for geometry in geometries(&document) {
        let report = validator.validate_json(geometry, crs).into_report();
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn geometries(document: &Value) -> Vec<&Value> {
    match document.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => document["features"]
            .as_array()
            .map(|features| features.iter().map(|f| &f["geometry"]).collect())
            .unwrap_or_default(),
        Some("Feature") => vec![&document["geometry"]],
        _ => vec![document],
    }
}
