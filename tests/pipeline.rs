//! End-to-end tests through the public API.

use u_tour::constructive::path_cheapest_arc;
use u_tour::distance::DistanceMatrix;
use u_tour::models::{CoordinateShift, GeoPoint};
use u_tour::report::RouteReport;
use u_tour::solver::{TourConfig, TourSolver};
use u_tour::TourError;

mod worked_examples {
    use super::*;

    #[test]
    fn test_right_triangle() {
        let points = vec![
            GeoPoint::new("Depot", 0.0, 0.0, 0.0),
            GeoPoint::new("A", 0.0, 3.0, 0.0),
            GeoPoint::new("B", 4.0, 0.0, 0.0),
        ];
        let dm = DistanceMatrix::from_points(&points).expect("valid");
        assert_eq!(dm.get(0, 1), 30_000);
        assert_eq!(dm.get(0, 2), 40_000);
        assert_eq!(dm.get(1, 2), 50_000);

        let route = path_cheapest_arc(&dm, 0).expect("tour");
        assert_eq!(route.indices(), &[0, 1, 2, 0]);
        assert_eq!(route.total_cost(), 120_000);

        let report = RouteReport::new(&route, &points).expect("report");
        assert_eq!(report.labels(), vec!["Depot", "A", "B", "Depot"]);
    }

    #[test]
    fn test_tie_break() {
        let points = vec![
            GeoPoint::new("Depot", 0.0, 0.0, 0.0),
            GeoPoint::new("A", 1.0, 0.0, 0.0),
            GeoPoint::new("B", 1.0, 0.0, 0.0),
        ];
        let dm = DistanceMatrix::from_points(&points).expect("valid");
        assert_eq!(dm.get(0, 1), 10_000);
        assert_eq!(dm.get(0, 2), 10_000);

        let route = path_cheapest_arc(&dm, 0).expect("tour");
        assert_eq!(route.indices()[1], 1);
    }

    #[test]
    fn test_trivial() {
        let sol = TourSolver::default()
            .solve(&[GeoPoint::new("Depot", 5.0, 5.0, 0.0)])
            .expect("tour");
        assert_eq!(sol.route().indices(), &[0, 0]);
        assert_eq!(sol.total_cost(), 0);
    }
}

mod pipeline {
    use super::*;

    fn adelaide() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new("Victoria Square", -34.928_585, 138.600_0, 0.0),
            GeoPoint::new("Botanic Garden", -34.917_7, 138.610_5, 3.0),
            GeoPoint::new("Glenelg Jetty", -34.980_6, 138.510_5, 5.0),
            GeoPoint::new("Adelaide Oval", -34.915_6, 138.596_1, 4.0),
            GeoPoint::new("Central Market", -34.930_1, 138.596_5, 2.0),
        ]
    }

    #[test]
    fn test_solve_visits_everything_once() {
        let points = adelaide();
        let sol = TourSolver::default().solve(&points).expect("tour");
        let labels = sol.report().labels();
        assert_eq!(labels.len(), points.len() + 1);
        assert_eq!(labels.first(), Some(&"Victoria Square"));
        assert_eq!(labels.last(), Some(&"Victoria Square"));
        for p in &points[1..] {
            assert_eq!(labels.iter().filter(|&&l| l == p.label()).count(), 1);
        }
    }

    #[test]
    fn test_nearest_first() {
        // Central Market is the closest stop to Victoria Square.
        let sol = TourSolver::default().solve(&adelaide()).expect("tour");
        assert_eq!(sol.report().labels()[1], "Central Market");
    }

    #[test]
    fn test_shift_does_not_change_matrix() {
        let points = adelaide();
        let shift = CoordinateShift::default();
        let shifted: Vec<GeoPoint> = points.iter().map(|p| p.shifted(&shift)).collect();
        let raw = DistanceMatrix::from_points(&points).expect("valid");
        let moved = DistanceMatrix::from_points(&shifted).expect("valid");
        for i in 0..points.len() {
            for j in 0..points.len() {
                let diff = raw.get(i, j).abs_diff(moved.get(i, j));
                assert!(diff <= 1, "entry ({i}, {j}) moved by {diff}");
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            TourSolver::default().solve(&[]).map(|s| s.total_cost()),
            Err(TourError::EmptyInput)
        );
    }

    #[test]
    fn test_config_round_trip_json() {
        let config = TourConfig::default().with_depot(1).with_scale(1000.0);
        let json = serde_json::to_string(&config).expect("serialize");
        let back: TourConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }

    #[test]
    fn test_report_json_shape() {
        let sol = TourSolver::default().solve(&adelaide()[..2]).expect("tour");
        let value = serde_json::to_value(sol.report()).expect("serialize");
        assert_eq!(value["total_cost"], sol.total_cost());
        let stops = value["stops"].as_array().expect("stops array");
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0]["label"], "Victoria Square");
        assert_eq!(stops[1]["label"], "Botanic Garden");
    }
}
