//! Closed tour type.

use serde::{Deserialize, Serialize};

/// A closed tour: an ordered sequence of point indices that starts and ends
/// at the depot, together with its total integer cost.
///
/// Routes built by [`path_cheapest_arc`](crate::constructive::path_cheapest_arc)
/// have length N+1 and visit every non-depot index exactly once. Routes built
/// by hand are not checked; use
/// [`RouteEvaluator::validate`](crate::evaluation::RouteEvaluator::validate).
///
/// # Examples
///
/// ```
/// use u_tour::models::Route;
///
/// let route = Route::new(vec![0, 2, 1, 0], 120_000);
/// assert_eq!(route.len(), 4);
/// assert_eq!(route.depot(), Some(0));
/// assert_eq!(route.stops(), &[2, 1]);
/// assert!(route.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    sequence: Vec<usize>,
    total_cost: u64,
}

impl Route {
    /// Creates a route from an index sequence and its total cost.
    pub fn new(sequence: Vec<usize>, total_cost: u64) -> Self {
        Self {
            sequence,
            total_cost,
        }
    }

    /// The full index sequence, depot at both ends.
    pub fn indices(&self) -> &[usize] {
        &self.sequence
    }

    /// The indices strictly between the leading and trailing depot.
    pub fn stops(&self) -> &[usize] {
        match self.sequence.len() {
            0 | 1 => &[],
            n => &self.sequence[1..n - 1],
        }
    }

    /// The depot index (first element), if any.
    pub fn depot(&self) -> Option<usize> {
        self.sequence.first().copied()
    }

    /// Returns `true` if the sequence starts and ends at the same index.
    pub fn is_closed(&self) -> bool {
        self.sequence.len() >= 2 && self.sequence.first() == self.sequence.last()
    }

    /// Length of the sequence, including both depot occurrences.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Total cost: the sum of matrix entries along consecutive indices.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Consecutive `(from, to)` arcs of the tour.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sequence.windows(2).map(|w| (w[0], w[1]))
    }

    /// Consumes the route, returning `(ordered_indices, total_cost)`.
    pub fn into_parts(self) -> (Vec<usize>, u64) {
        (self.sequence, self.total_cost)
    }
}
