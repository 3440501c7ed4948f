use lowlands_types::cartesian::Rect;
use lowlands_types::geo::Crs;

use super::error::{Axis, GeometryError};

/// Checks coordinates against the legal range of a coordinate system.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundsValidator {
    bounds: Rect,
    axes: (Axis, Axis),
}

impl BoundsValidator {
    /// Creates a validator for the given coordinate system.
    pub fn new(crs: Crs) -> Self {
        Self {
            bounds: crs.valid_bounds(),
            axes: Axis::of(crs),
        }
    }

    /// Returns an error for every out-of-range value. A coordinate with both values out of range produces two
    /// errors. The whole sequence is always checked.
    ///
    /// Non-finite values are never in range.
    pub fn check(&self, coordinates: &[[f64; 2]]) -> Vec<GeometryError> {
        let (first_axis, second_axis) = self.axes;
        let bounds = &self.bounds;

        let mut errors = vec![];
        for &[x, y] in coordinates {
            if let Some(error) = check_value(first_axis, x, bounds.x_min, bounds.x_max) {
                errors.push(error);
            }
            if let Some(error) = check_value(second_axis, y, bounds.y_min, bounds.y_max) {
                errors.push(error);
            }
        }

        errors
    }
}

fn check_value(axis: Axis, value: f64, min: f64, max: f64) -> Option<GeometryError> {
    if (min..=max).contains(&value) {
        None
    } else {
        Some(GeometryError::CoordinateOutOfRange {
            axis,
            value,
            min,
            max,
        })
    }
}
