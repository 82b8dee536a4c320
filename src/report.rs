//! Projection of a route onto its points for external formatting.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};
use crate::models::{GeoPoint, Route};

/// The points of a tour in visiting order, with its total cost.
///
/// Pure index lookup: no I/O and no formatting beyond exposing labels.
///
/// # Examples
///
/// ```
/// use u_tour::models::{GeoPoint, Route};
/// use u_tour::report::RouteReport;
///
/// let points = vec![
///     GeoPoint::new("Depot", 0.0, 0.0, 0.0),
///     GeoPoint::new("A", 0.0, 3.0, 0.0),
/// ];
/// let route = Route::new(vec![0, 1, 0], 60_000);
/// let report = RouteReport::new(&route, &points).unwrap();
/// assert_eq!(report.labels(), vec!["Depot", "A", "Depot"]);
/// assert_eq!(report.total_cost(), 60_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    stops: Vec<GeoPoint>,
    total_cost: u64,
}

impl RouteReport {
    /// Looks up every route index in `points`.
    ///
    /// # Errors
    ///
    /// [`TourError::IndexOutOfRange`] if the route refers to a missing point.
    pub fn new(route: &Route, points: &[GeoPoint]) -> Result<Self> {
        let stops = route
            .indices()
            .iter()
            .map(|&index| {
                points.get(index).cloned().ok_or(TourError::IndexOutOfRange {
                    index,
                    size: points.len(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            stops,
            total_cost: route.total_cost(),
        })
    }

    /// Points in visiting order, depot at both ends.
    pub fn stops(&self) -> &[GeoPoint] {
        &self.stops
    }

    /// Labels in visiting order, depot at both ends.
    pub fn labels(&self) -> Vec<&str> {
        self.stops.iter().map(GeoPoint::label).collect()
    }

    /// Total integer cost of the tour.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }
}
