//! End-to-end tour pipeline: points → matrix → route → report.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::constructive::path_cheapest_arc;
use crate::distance::{DistanceMatrix, MatrixConfig};
use crate::error::{Result, TourError};
use crate::models::{GeoPoint, Route};
use crate::report::RouteReport;

/// Configuration for [`TourSolver`].
///
/// # Examples
///
/// ```
/// use u_tour::solver::TourConfig;
///
/// let config = TourConfig::default().with_depot(2).with_scale(100.0);
/// assert_eq!(config.depot(), 2);
/// assert_eq!(config.matrix().scale(), 100.0);
/// assert_eq!(TourConfig::default().depot(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TourConfig {
    depot: usize,
    matrix: MatrixConfig,
}

impl TourConfig {
    /// Sets the index the tour starts and ends at.
    pub fn with_depot(mut self, depot: usize) -> Self {
        self.depot = depot;
        self
    }

    /// Sets the distance precision factor.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.matrix = self.matrix.with_scale(scale);
        self
    }

    /// Replaces the matrix configuration.
    pub fn with_matrix(mut self, matrix: MatrixConfig) -> Self {
        self.matrix = matrix;
        self
    }

    /// Depot index.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Matrix configuration.
    pub fn matrix(&self) -> &MatrixConfig {
        &self.matrix
    }
}

/// Artifacts produced by one [`TourSolver::solve`] call.
#[derive(Debug, Clone)]
pub struct TourSolution {
    distances: DistanceMatrix,
    route: Route,
    report: RouteReport,
}

impl TourSolution {
    /// The integer cost matrix the tour was built over.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// The closed tour as point indices.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The tour as points in visiting order.
    pub fn report(&self) -> &RouteReport {
        &self.report
    }

    /// Total integer cost of the tour.
    pub fn total_cost(&self) -> u64 {
        self.route.total_cost()
    }

    /// Consumes the solution, returning the report.
    pub fn into_report(self) -> RouteReport {
        self.report
    }
}

/// Runs matrix construction, cheapest-arc construction and reporting.
///
/// # Examples
///
/// ```
/// use u_tour::models::GeoPoint;
/// use u_tour::solver::{TourConfig, TourSolver};
///
/// let points = vec![
///     GeoPoint::new("Depot", 0.0, 0.0, 0.0),
///     GeoPoint::new("A", 0.0, 3.0, 0.0),
///     GeoPoint::new("B", 4.0, 0.0, 0.0),
/// ];
/// let solution = TourSolver::new(TourConfig::default()).solve(&points).unwrap();
/// assert_eq!(solution.report().labels(), vec!["Depot", "A", "B", "Depot"]);
/// assert_eq!(solution.total_cost(), 120_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TourSolver {
    config: TourConfig,
}

impl TourSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: TourConfig) -> Self {
        Self { config }
    }

    /// Solver configuration.
    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    /// Builds a closed tour over `points`.
    ///
    /// # Errors
    ///
    /// - [`TourError::EmptyInput`] if `points` is empty
    /// - [`TourError::DepotOutOfRange`] if the depot does not address a point
    /// - any error from [`DistanceMatrix::build`] or
    ///   [`path_cheapest_arc`]
    pub fn solve(&self, points: &[GeoPoint]) -> Result<TourSolution> {
        if points.is_empty() {
            return Err(TourError::EmptyInput);
        }
        let depot = self.config.depot();
        if depot >= points.len() {
            return Err(TourError::DepotOutOfRange {
                depot,
                size: points.len(),
            });
        }
        warn_duplicates(points);

        let distances = DistanceMatrix::build(points, self.config.matrix())?;
        let route = path_cheapest_arc(&distances, depot)?;
        let report = RouteReport::new(&route, points)?;
        debug!("tour order: {:?}", route.indices());
        info!(
            "tour over {} points from {} costs {}",
            points.len(),
            points[depot],
            route.total_cost()
        );

        Ok(TourSolution {
            distances,
            route,
            report,
        })
    }
}

fn warn_duplicates(points: &[GeoPoint]) {
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            if a == b {
                warn!("points {i} ({a}) and {j} ({b}) share coordinates");
            }
        }
    }
}
