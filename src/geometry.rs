//! Geometric primitives over resolved pixel-space points.

use crate::types::Point;

/// Euclidean distance between two points. Coincident points give 0.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(&b)
}

/// Absolute vertical separation between two points.
pub fn vertical_span(a: Point, b: Point) -> f64 {
    (a.y - b.y).abs()
}

/// Vertical distance from the horizontal line through the midpoint of
/// `left` and `right` down (or up) to `to`.
pub fn midline_drop(left: Point, right: Point, to: Point) -> f64 {
    ((left.y + right.y) / 2.0 - to.y).abs()
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Absolute percentage deviation of each value from the mean of all values.
///
/// Returns `None` when the mean is zero.
pub fn percent_deviations(values: &[f64]) -> Option<Vec<f64>> {
    let avg = mean(values);
    if avg == 0.0 {
        return None;
    }
    Some(
        values
            .iter()
            .map(|v| (v - avg).abs() / avg * 100.0)
            .collect(),
    )
}
