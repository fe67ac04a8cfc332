//! The eleven facial harmony metrics.
//!
//! Each metric is declared as data: which lengths it measures between which
//! landmarks, its ideal value and its weight. Lengths shared between metrics
//! (cheekbone width, nostril width, ...) are named constants and are
//! re-measured by every metric that uses them, so no metric depends on
//! another metric's intermediate values.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{distance, midline_drop, percent_deviations, vertical_span};
use crate::landmarks::{Landmark, LandmarkSet};

use Landmark::*;

/// Sum of `max_points` across [`CATALOG`].
pub const TOTAL_MAX_POINTS: u32 = 100;

/// A length measured between landmarks, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Straight-line distance.
    Distance(Landmark, Landmark),
    /// Absolute difference of y-coordinates.
    VerticalSpan(Landmark, Landmark),
    /// Vertical distance from the line through the midpoint of `left` and
    /// `right` to `to`.
    MidlineDrop {
        left: Landmark,
        right: Landmark,
        to: Landmark,
    },
}

impl Length {
    pub fn measure(&self, set: &LandmarkSet) -> Result<f64> {
        Ok(match *self {
            Length::Distance(a, b) => {
                distance(set.resolve_landmark(a)?, set.resolve_landmark(b)?)
            }
            Length::VerticalSpan(a, b) => {
                vertical_span(set.resolve_landmark(a)?, set.resolve_landmark(b)?)
            }
            Length::MidlineDrop { left, right, to } => midline_drop(
                set.resolve_landmark(left)?,
                set.resolve_landmark(right)?,
                set.resolve_landmark(to)?,
            ),
        })
    }

    /// The pair of landmarks reported when this length turns out to be zero.
    pub fn endpoints(&self) -> (Landmark, Landmark) {
        match *self {
            Length::Distance(a, b) | Length::VerticalSpan(a, b) => (a, b),
            Length::MidlineDrop { left, to, .. } => (left, to),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Length::Distance(..) => "distance",
            Length::VerticalSpan(..) => "vertical span",
            Length::MidlineDrop { .. } => "midline drop",
        }
    }
}

/// How a metric turns landmark lengths into one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// `numerator / denominator`, compared against a non-zero ideal ratio.
    Ratio { numerator: Length, denominator: Length },
    /// Mean percentage deviation of three lengths from their own mean,
    /// compared against an ideal of 0.
    ThreeWaySpread([Length; 3]),
}

/// Value shown to the operator as the metric's observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Observed {
    Scalar(f64),
    /// The three raw lengths behind a three-way spread metric.
    Triple([f64; 3]),
}

/// Raw outcome of measuring one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Number fed to scoring: the ratio, or the mean deviation percentage.
    pub value: f64,
    pub observed: Observed,
}

/// Static description of one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDefinition {
    pub name: &'static str,
    pub max_points: u32,
    pub ideal: f64,
    pub measurement: Measurement,
}

impl MetricDefinition {
    /// Whether the observation is already a deviation percentage.
    pub fn is_deviation_metric(&self) -> bool {
        matches!(self.measurement, Measurement::ThreeWaySpread(_))
    }

    /// Measure this metric on a landmark set.
    ///
    /// Only the landmarks this metric uses need to be recorded. A zero
    /// denominator fails with `DegenerateGeometry` naming the metric and the
    /// landmarks involved.
    pub fn observe(&self, set: &LandmarkSet) -> Result<Observation> {
        match self.measurement {
            Measurement::Ratio {
                numerator,
                denominator,
            } => {
                let num = numerator.measure(set)?;
                let den = denominator.measure(set)?;
                if den == 0.0 {
                    return Err(self.degenerate(&denominator));
                }
                let value = num / den;
                Ok(Observation {
                    value,
                    observed: Observed::Scalar(value),
                })
            }
            Measurement::ThreeWaySpread(lengths) => {
                let raw = [
                    lengths[0].measure(set)?,
                    lengths[1].measure(set)?,
                    lengths[2].measure(set)?,
                ];
                let deviations =
                    percent_deviations(&raw).ok_or_else(|| self.degenerate(&lengths[1]))?;
                let value = deviations.iter().sum::<f64>() / deviations.len() as f64;
                Ok(Observation {
                    value,
                    observed: Observed::Triple(raw),
                })
            }
        }
    }

    fn degenerate(&self, length: &Length) -> Error {
        let (a, b) = length.endpoints();
        Error::DegenerateGeometry {
            metric: self.name,
            length: length.kind(),
            a: a.index(),
            b: b.index(),
        }
    }
}

const INTERPUPILLARY: Length = Length::Distance(LeftPupil, RightPupil);
const CHEEKBONE_WIDTH: Length = Length::Distance(LeftCheekbone, RightCheekbone);
const NOSTRIL_WIDTH: Length = Length::Distance(LeftNostril, RightNostril);

/// The metrics in presentation and export order.
pub static CATALOG: [MetricDefinition; 11] = [
    MetricDefinition {
        name: "Midface ratio",
        max_points: 15,
        ideal: 1.00,
        measurement: Measurement::Ratio {
            numerator: Length::MidlineDrop {
                left: LeftPupil,
                right: RightPupil,
                to: UpperLipTop,
            },
            denominator: INTERPUPILLARY,
        },
    },
    MetricDefinition {
        name: "FWHR",
        max_points: 10,
        ideal: 1.99,
        measurement: Measurement::Ratio {
            numerator: CHEEKBONE_WIDTH,
            denominator: Length::VerticalSpan(Glabella, UpperLipTop),
        },
    },
    MetricDefinition {
        name: "Face height",
        max_points: 8,
        ideal: 1.37,
        measurement: Measurement::Ratio {
            numerator: Length::Distance(Hairline, ChinBottom),
            denominator: CHEEKBONE_WIDTH,
        },
    },
    MetricDefinition {
        name: "E.S ratio",
        max_points: 7,
        ideal: 0.46,
        measurement: Measurement::Ratio {
            numerator: INTERPUPILLARY,
            denominator: CHEEKBONE_WIDTH,
        },
    },
    MetricDefinition {
        name: "Jaw width",
        max_points: 12,
        ideal: 0.94,
        measurement: Measurement::Ratio {
            numerator: Length::Distance(LeftJaw, RightJaw),
            denominator: CHEEKBONE_WIDTH,
        },
    },
    MetricDefinition {
        name: "Nose length to width",
        max_points: 6,
        ideal: 1.45,
        measurement: Measurement::Ratio {
            numerator: Length::Distance(Glabella, NoseBase),
            denominator: NOSTRIL_WIDTH,
        },
    },
    MetricDefinition {
        name: "Nose width",
        max_points: 6,
        ideal: 0.25,
        measurement: Measurement::Ratio {
            numerator: NOSTRIL_WIDTH,
            denominator: CHEEKBONE_WIDTH,
        },
    },
    MetricDefinition {
        name: "Nose-Lips Ratio",
        max_points: 5,
        ideal: 1.55,
        measurement: Measurement::Ratio {
            numerator: Length::Distance(LeftMouthCorner, RightMouthCorner),
            denominator: NOSTRIL_WIDTH,
        },
    },
    MetricDefinition {
        name: "Nose = Chin Ratio",
        max_points: 8,
        ideal: 1.00,
        measurement: Measurement::Ratio {
            numerator: NOSTRIL_WIDTH,
            denominator: Length::Distance(LeftChin, RightChin),
        },
    },
    MetricDefinition {
        name: "Chin to Philtrum",
        max_points: 10,
        ideal: 2.40,
        measurement: Measurement::Ratio {
            numerator: Length::Distance(ChinBottom, LowerLipBottom),
            denominator: Length::Distance(UpperLipTop, NoseBase),
        },
    },
    MetricDefinition {
        name: "One-eye distance (1:1:1)",
        max_points: 13,
        ideal: 0.00,
        measurement: Measurement::ThreeWaySpread([
            Length::Distance(LeftEyeOuterCorner, LeftEyeInnerCorner),
            Length::Distance(LeftEyeInnerCorner, RightEyeInnerCorner),
            Length::Distance(RightEyeOuterCorner, RightEyeInnerCorner),
        ]),
    },
];
