//! Deviation-to-points mapping shared by all metrics.

use serde::{Deserialize, Serialize};

/// Deviation and points earned for one observation.
///
/// Values are kept at full precision; rounding happens only when a report
/// is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Percentage deviation from the ideal (always >= 0).
    pub deviation_pct: f64,
    /// Points earned, in `0.0..=max_points`.
    pub points: f64,
}

/// Score an observation against its ideal.
///
/// For ratio metrics the deviation is `|observed - ideal| / ideal * 100`.
/// For deviation metrics `observed` already is a percentage and is used as
/// is. Points are `max - max * deviation / 100`, floored at zero.
pub fn score(max_points: u32, ideal: f64, observed: f64, is_deviation_metric: bool) -> Score {
    let deviation_pct = if is_deviation_metric {
        observed
    } else {
        debug_assert!(ideal != 0.0, "ratio metric with a zero ideal");
        (observed - ideal).abs() / ideal * 100.0
    };
    Score {
        deviation_pct,
        points: points_for(max_points, deviation_pct),
    }
}

/// Points left after deducting `deviation_pct` percent of `max_points`.
pub fn points_for(max_points: u32, deviation_pct: f64) -> f64 {
    let max = max_points as f64;
    (max - max * deviation_pct / 100.0).max(0.0)
}
