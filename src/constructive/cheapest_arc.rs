//! Path-cheapest-arc constructive heuristic.
//!
//! Builds one closed tour greedily: starting from the depot, always extend
//! the path along the cheapest arc to an unvisited location, then return to
//! the depot once every location has been visited. Ties go to the lowest
//! location index. There is no backtracking and no improvement pass.
//!
//! # Complexity
//!
//! O(n²) time, O(n) space beyond the matrix.

use log::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::models::Route;

/// Constructs a closed tour over every location of `distances`.
///
/// # Arguments
///
/// * `distances` — Integer cost matrix
/// * `depot` — Index the tour starts and ends at
///
/// # Errors
///
/// - [`TourError::EmptyInput`] if the matrix has no locations
/// - [`TourError::DepotOutOfRange`] if `depot` does not address a location
/// - [`TourError::CostOverflow`] if the tour cost does not fit in a `u64`
///
/// # Examples
///
/// ```
/// use u_tour::models::GeoPoint;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::path_cheapest_arc;
///
/// let points = vec![
///     GeoPoint::new("Depot", 0.0, 0.0, 0.0),
///     GeoPoint::new("A", 0.0, 3.0, 0.0),
///     GeoPoint::new("B", 4.0, 0.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
///
/// let route = path_cheapest_arc(&dm, 0).unwrap();
/// assert_eq!(route.indices(), &[0, 1, 2, 0]);
/// assert_eq!(route.total_cost(), 120_000);
/// ```
pub fn path_cheapest_arc(distances: &DistanceMatrix, depot: usize) -> Result<Route> {
    let n = distances.size();
    if n == 0 {
        return Err(TourError::EmptyInput);
    }
    if depot >= n {
        return Err(TourError::DepotOutOfRange { depot, size: n });
    }

    let mut visited = vec![false; n];
    visited[depot] = true;

    let mut sequence = Vec::with_capacity(n + 1);
    sequence.push(depot);
    let mut current = depot;
    let mut total: u64 = 0;

    while let Some((next, cost)) = distances.nearest_unvisited(current, &visited) {
        trace!("arc {current} -> {next} (cost {cost})");
        total = total.checked_add(cost).ok_or(TourError::CostOverflow)?;
        visited[next] = true;
        sequence.push(next);
        current = next;
    }

    total = total
        .checked_add(distances.get(current, depot))
        .ok_or(TourError::CostOverflow)?;
    sequence.push(depot);

    debug!("constructed tour over {n} locations, cost {total}");
    Ok(Route::new(sequence, total))
}
