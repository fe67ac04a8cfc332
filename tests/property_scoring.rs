use proptest::prelude::*;

mod common;

use common::{ideal_face_pixels, set_from_pixels};
use facial_harmony::scoring::{points_for, score};
use facial_harmony::{evaluate, Point, TOTAL_MAX_POINTS};

proptest! {
    #[test]
    fn pt_ratio_score_stays_in_bounds(
        max_points in 1_u32..20,
        ideal in 0.1_f64..3.0,
        observed in 0.0_f64..10.0,
    ) {
        let s = score(max_points, ideal, observed, false);
        let expected = (observed - ideal).abs() / ideal * 100.0;
        prop_assert!((s.deviation_pct - expected).abs() < 1e-9);
        prop_assert!(s.points >= 0.0);
        prop_assert!(s.points <= max_points as f64);
        if s.deviation_pct >= 100.0 {
            prop_assert_eq!(s.points, 0.0);
        }
    }

    #[test]
    fn pt_deviation_metric_passes_percentage_through(
        max_points in 1_u32..20,
        observed in 0.0_f64..500.0,
    ) {
        let s = score(max_points, 0.0, observed, true);
        prop_assert_eq!(s.deviation_pct, observed);
        prop_assert_eq!(s.points, points_for(max_points, observed));
    }

    #[test]
    fn pt_points_decrease_with_deviation(
        max_points in 1_u32..20,
        a in 0.0_f64..150.0,
        b in 0.0_f64..150.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(points_for(max_points, lo) >= points_for(max_points, hi));
    }

    #[test]
    fn pt_jittered_face_report_is_consistent(
        jitter in proptest::collection::vec((-10.0_f64..10.0, -10.0_f64..10.0), 22),
    ) {
        let pixels: Vec<Point> = ideal_face_pixels()
            .into_iter()
            .zip(jitter)
            .map(|(p, (dx, dy))| Point::new(p.x + dx, p.y + dy))
            .collect();
        let report = evaluate(&set_from_pixels(pixels)).unwrap();

        prop_assert_eq!(report.results().len(), 11);
        prop_assert_eq!(report.total_max_points(), TOTAL_MAX_POINTS);

        let sum: f64 = report.results().iter().map(|r| r.score).sum();
        prop_assert!((report.total_score() - sum).abs() < 1e-9);
        prop_assert!((report.aggregate_score() - sum / 11.0).abs() < 1e-9);

        for r in report.results() {
            prop_assert!(r.score >= 0.0 && r.score <= r.max_points as f64);
            prop_assert!(r.deviation_pct >= 0.0);
        }
    }
}
