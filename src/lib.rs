//! # facial-harmony
//!
//! Facial harmony scoring from manually placed facial landmarks.
//!
//! This crate provides:
//! - **Landmarks**: the 22 canonical reference points and an append-only
//!   [`LandmarkSet`] storing them as fractions of the image size
//! - **Metric catalog**: eleven declarative metrics comparing facial
//!   proportions with ideal ratios
//! - **Scoring**: deviation-to-points mapping and an aggregate harmony score
//! - **Reports**: human-readable text, CSV and JSON renderings
//!
//! ## Algorithm Overview
//!
//! 1. The operator places the 22 landmarks in canonical order
//! 2. Each metric resolves its landmarks to pixel coordinates and measures a
//!    ratio of two lengths (or, for the eye metric, how far three lengths
//!    deviate from their mean)
//! 3. The deviation from the ideal value, in percent, is deducted from the
//!    metric's maximum points, floored at zero
//! 4. The harmony score is the mean of the eleven metric scores
//!
//! ## Quick Start
//!
//! ```rust
//! use facial_harmony::{evaluate, Error, ImageSize, LandmarkSet, Point};
//!
//! let size = ImageSize::new(800, 1000).unwrap();
//! let mut set = LandmarkSet::new(size);
//! assert_eq!(set.prompt(), "Punto 1 de 22: Coloca Pupila izquierda");
//!
//! // Points can be recorded in pixels or as fractions of the image size.
//! set.record_pixel(Point::new(340.0, 400.0)).unwrap();
//! set.record(Point::new(0.575, 0.4)).unwrap();
//!
//! // Scoring needs every landmark.
//! assert!(matches!(evaluate(&set), Err(Error::IncompleteSet { missing: 3, .. })));
//! ```
//!
//! Once all 22 points are placed, [`evaluate`] returns an
//! [`EvaluationReport`] that can be printed or exported with
//! [`EvaluationReport::to_csv`].

pub mod catalog;
mod error;
mod evaluator;
pub mod geometry;
mod landmarks;
pub mod logging;
mod report;
pub mod scoring;
mod types;

pub use catalog::{
    Length, Measurement, MetricDefinition, Observation, Observed, CATALOG, TOTAL_MAX_POINTS,
};
pub use error::{Error, Result};
pub use evaluator::{evaluate, evaluate_metric, EvaluationReport, MetricResult};
pub use landmarks::{CoordinateSpace, Landmark, LandmarkDocument, LandmarkSet, NUM_LANDMARKS};
pub use report::{CSV_HEADER, DEFAULT_CSV_FILE_NAME};
pub use scoring::{score, Score};
pub use types::{ImageSize, Point};
