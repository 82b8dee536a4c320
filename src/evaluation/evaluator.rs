//! Route evaluator that re-accumulates tour cost and checks tour structure.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::models::Route;

/// A kind of structural defect in a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// The sequence does not start and end at the same index.
    NotClosed,
    /// The sequence length is not N+1.
    WrongLength {
        /// Expected length (matrix size + 1).
        expected: usize,
        /// Actual sequence length.
        actual: usize,
    },
    /// An index does not address a location in the matrix.
    IndexOutOfRange {
        /// Position in the sequence.
        position: usize,
        /// Offending index.
        index: usize,
    },
    /// A location appears more than once between the two depot visits.
    DuplicateVisit {
        /// Location index.
        index: usize,
    },
    /// A location never appears in the sequence.
    MissingVisit {
        /// Location index.
        index: usize,
    },
    /// The recorded total cost differs from the sum of arc costs.
    CostMismatch {
        /// Cost stored on the route.
        recorded: u64,
        /// Cost re-accumulated from the matrix.
        computed: u64,
    },
}

/// A structural defect found in a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Evaluates routes against a distance matrix.
///
/// # Examples
///
/// ```
/// use u_tour::models::{GeoPoint, Route};
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::RouteEvaluator;
///
/// let points = vec![
///     GeoPoint::new("Depot", 0.0, 0.0, 0.0),
///     GeoPoint::new("A", 0.0, 3.0, 0.0),
///     GeoPoint::new("B", 4.0, 0.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
/// let evaluator = RouteEvaluator::new(&dm);
///
/// assert_eq!(evaluator.route_cost(&[0, 2, 1, 0]).unwrap(), 120_000);
/// assert!(evaluator.validate(&Route::new(vec![0, 1, 2, 0], 120_000)).is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator over the given matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Sums the matrix cost of each consecutive arc in `sequence`.
    ///
    /// # Errors
    ///
    /// - [`TourError::IndexOutOfRange`] for an index outside the matrix
    /// - [`TourError::CostOverflow`] if the sum does not fit in a `u64`
    pub fn route_cost(&self, sequence: &[usize]) -> Result<u64> {
        let size = self.distances.size();
        if let Some(&index) = sequence.iter().find(|&&i| i >= size) {
            return Err(TourError::IndexOutOfRange { index, size });
        }
        sequence.windows(2).try_fold(0u64, |acc, w| {
            acc.checked_add(self.distances.get(w[0], w[1]))
                .ok_or(TourError::CostOverflow)
        })
    }

    /// Checks that `route` is a closed tour visiting every location exactly
    /// once and that its recorded cost matches the matrix.
    ///
    /// A valid route yields an empty list.
    pub fn validate(&self, route: &Route) -> Vec<Violation> {
        let size = self.distances.size();
        let indices = route.indices();
        let mut violations = Vec::new();

        if !route.is_closed() {
            violations.push(Violation::new(ViolationType::NotClosed));
        }
        if indices.len() != size + 1 {
            violations.push(Violation::new(ViolationType::WrongLength {
                expected: size + 1,
                actual: indices.len(),
            }));
        }

        let mut out_of_range = false;
        for (position, &index) in indices.iter().enumerate() {
            if index >= size {
                out_of_range = true;
                violations.push(Violation::new(ViolationType::IndexOutOfRange {
                    position,
                    index,
                }));
            }
        }

        // Count the leading depot once and every interior stop; the
        // trailing depot only closes the tour.
        let mut seen = vec![0usize; size];
        let counted = match indices.len() {
            0 => &indices[..0],
            1 => indices,
            n => &indices[..n - 1],
        };
        for &index in counted.iter().filter(|&&i| i < size) {
            seen[index] += 1;
        }
        for (index, &count) in seen.iter().enumerate() {
            match count {
                0 => violations.push(Violation::new(ViolationType::MissingVisit { index })),
                1 => {}
                _ => violations.push(Violation::new(ViolationType::DuplicateVisit { index })),
            }
        }

        if !out_of_range {
            if let Ok(computed) = self.route_cost(indices) {
                if computed != route.total_cost() {
                    violations.push(Violation::new(ViolationType::CostMismatch {
                        recorded: route.total_cost(),
                        computed,
                    }));
                }
            }
        }

        violations
    }
}
