//! Runs the metric catalog over a landmark set.

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{MetricDefinition, Observed, CATALOG};
use crate::error::{Error, Result};
use crate::landmarks::LandmarkSet;
use crate::scoring::score;

/// Outcome of scoring one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub name: &'static str,
    pub max_points: u32,
    pub ideal: f64,
    pub observed: Observed,
    pub deviation_pct: f64,
    pub score: f64,
}

/// Per-metric results in catalog order plus their aggregates.
///
/// Built fresh by every [`evaluate`] call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    results: Vec<MetricResult>,
    /// Mean of the per-metric scores.
    aggregate_score: f64,
    /// Sum of the per-metric scores.
    total_score: f64,
    total_max_points: u32,
}

impl EvaluationReport {
    pub fn from_results(results: Vec<MetricResult>) -> Self {
        let total_score: f64 = results.iter().map(|r| r.score).sum();
        let total_max_points = results.iter().map(|r| r.max_points).sum();
        let aggregate_score = if results.is_empty() {
            0.0
        } else {
            total_score / results.len() as f64
        };
        Self {
            results,
            aggregate_score,
            total_score,
            total_max_points,
        }
    }

    pub fn results(&self) -> &[MetricResult] {
        &self.results
    }

    pub fn aggregate_score(&self) -> f64 {
        self.aggregate_score
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    pub fn total_max_points(&self) -> u32 {
        self.total_max_points
    }

    pub fn get(&self, name: &str) -> Option<&MetricResult> {
        self.results.iter().find(|r| r.name == name)
    }
}

/// Measure and score a single metric.
pub fn evaluate_metric(metric: &MetricDefinition, set: &LandmarkSet) -> Result<MetricResult> {
    let observation = metric.observe(set).inspect_err(|e| {
        if let Error::DegenerateGeometry { a, b, length, .. } = e {
            warn!(metric = metric.name, a, b, length, "Zero-length denominator");
        }
    })?;

    let s = score(
        metric.max_points,
        metric.ideal,
        observation.value,
        metric.is_deviation_metric(),
    );
    debug!(
        metric = metric.name,
        observed = observation.value,
        deviation_pct = s.deviation_pct,
        score = s.points,
        "Scored metric"
    );

    Ok(MetricResult {
        name: metric.name,
        max_points: metric.max_points,
        ideal: metric.ideal,
        observed: observation.observed,
        deviation_pct: s.deviation_pct,
        score: s.points,
    })
}

/// Score a complete landmark set against every metric in the catalog.
///
/// Fails with `IncompleteSet` unless all 22 landmarks are present. The first
/// metric that hits degenerate geometry aborts the evaluation with
/// `DegenerateGeometry`; no partial report is ever returned.
pub fn evaluate(set: &LandmarkSet) -> Result<EvaluationReport> {
    set.ensure_complete()?;

    let results = CATALOG
        .iter()
        .map(|metric| evaluate_metric(metric, set))
        .collect::<Result<Vec<_>>>()?;
    let report = EvaluationReport::from_results(results);

    debug!(
        aggregate = report.aggregate_score,
        total = report.total_score,
        "Evaluation finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImageSize, Point};

    fn result(name: &'static str, max_points: u32, score: f64) -> MetricResult {
        MetricResult {
            name,
            max_points,
            ideal: 1.0,
            observed: Observed::Scalar(1.0),
            deviation_pct: 0.0,
            score,
        }
    }

    #[test]
    fn aggregate_is_mean_of_scores_not_of_percentages() {
        let report = EvaluationReport::from_results(vec![
            result("a", 15, 15.0),
            result("b", 5, 0.0),
        ]);
        assert_eq!(report.total_score(), 15.0);
        assert_eq!(report.total_max_points(), 20);
        assert_eq!(report.aggregate_score(), 7.5);
        assert_eq!(report.get("b").map(|r| r.max_points), Some(5));
    }

    #[test]
    fn incomplete_set_is_rejected_before_scoring() {
        let size = ImageSize::new(100, 100).unwrap();
        let set =
            LandmarkSet::from_normalized(size, vec![Point::new(0.5, 0.5); 21]).unwrap();

        match evaluate(&set) {
            Err(Error::IncompleteSet {
                recorded,
                required,
                missing,
                name,
            }) => {
                assert_eq!((recorded, required, missing), (21, 22, 22));
                assert_eq!(name, "Hairline / línea del cabello");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn all_coincident_points_fail_on_first_metric() {
        let size = ImageSize::new(100, 100).unwrap();
        let set =
            LandmarkSet::from_normalized(size, vec![Point::new(0.5, 0.5); 22]).unwrap();

        assert!(matches!(
            evaluate(&set),
            Err(Error::DegenerateGeometry {
                metric: "Midface ratio",
                ..
            })
        ));
    }
}
