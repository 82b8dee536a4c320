//! Dense integer distance matrix.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};
use crate::models::GeoPoint;

/// Precision factor applied to real distances before truncation.
///
/// Keeps four decimal digits of the planar distance.
pub const DEFAULT_SCALE: f64 = 10_000.0;

/// Configuration for [`DistanceMatrix::build`].
///
/// # Examples
///
/// ```
/// use u_tour::distance::{MatrixConfig, DEFAULT_SCALE};
///
/// assert_eq!(MatrixConfig::default().scale(), DEFAULT_SCALE);
/// assert_eq!(MatrixConfig::default().with_scale(100.0).scale(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixConfig {
    scale: f64,
}

impl MatrixConfig {
    /// Sets the precision factor.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Precision factor multiplied into every real distance.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(TourError::InvalidScale { scale: self.scale });
        }
        Ok(())
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

/// Converts a non-negative real distance to an integer arc cost.
///
/// Multiplies by `scale` and truncates toward zero.
///
/// # Errors
///
/// [`TourError::CostOverflow`] if the scaled value does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use u_tour::distance::scale_distance;
///
/// assert_eq!(scale_distance(3.0, 10_000.0), Ok(30_000));
/// assert_eq!(scale_distance(0.12349, 10_000.0), Ok(1_234));
/// assert_eq!(scale_distance(0.99999, 1.0), Ok(0));
/// assert!(scale_distance(1e300, 10_000.0).is_err());
/// ```
pub fn scale_distance(distance: f64, scale: f64) -> Result<u64> {
    let scaled = (distance * scale).trunc();
    // u64::MAX as f64 rounds up to 2^64, the first value that does not fit.
    if scaled.is_nan() || scaled >= u64::MAX as f64 {
        return Err(TourError::CostOverflow);
    }
    Ok(scaled as u64)
}

/// A dense n×n integer cost matrix stored in row-major order.
///
/// Built once from a point set and never mutated afterward. Matrices built
/// from points are symmetric with a zero diagonal.
///
/// # Examples
///
/// ```
/// use u_tour::models::GeoPoint;
/// use u_tour::distance::DistanceMatrix;
///
/// let points = vec![
///     GeoPoint::new("Depot", 0.0, 0.0, 0.0),
///     GeoPoint::new("A", 0.0, 3.0, 0.0),
///     GeoPoint::new("B", 4.0, 0.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), 30_000);
/// assert_eq!(dm.get(1, 2), 50_000);
/// assert!(dm.is_symmetric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds the matrix from points with the default precision factor.
    pub fn from_points(points: &[GeoPoint]) -> Result<Self> {
        Self::build(points, &MatrixConfig::default())
    }

    /// Builds the matrix from points.
    ///
    /// Each entry is the planar distance between two points multiplied by
    /// the configured scale and truncated toward zero.
    ///
    /// # Errors
    ///
    /// - [`TourError::EmptyInput`] if `points` is empty
    /// - [`TourError::InvalidScale`] if the scale is not finite and positive
    /// - [`TourError::NonFiniteCoordinate`] for a NaN or infinite coordinate
    /// - [`TourError::CostOverflow`] if a scaled distance does not fit in a `u64`
    pub fn build(points: &[GeoPoint], config: &MatrixConfig) -> Result<Self> {
        if points.is_empty() {
            return Err(TourError::EmptyInput);
        }
        config.validate()?;
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(TourError::NonFiniteCoordinate {
                index,
                label: p.label().to_string(),
            });
        }

        let n = points.len();
        let mut data = vec![0u64; n * n];
        // Truncating the same real value gives the same integer, so the
        // upper triangle is mirrored.
        for i in 0..n {
            for j in (i + 1)..n {
                let cost = scale_distance(points[i].distance_to(&points[j]), config.scale())?;
                data[i * n + j] = cost;
                data[j * n + i] = cost;
            }
        }
        debug!("built {n}x{n} distance matrix (scale {})", config.scale());
        Ok(Self { data, size: n })
    }

    /// Creates a matrix from an explicit n×n grid in row-major order.
    ///
    /// Returns `None` if the data length doesn't match `size * size`, or if
    /// the grid is not symmetric with a zero diagonal.
    pub fn from_data(size: usize, data: Vec<u64>) -> Option<Self> {
        size.checked_mul(size).filter(|&n| n == data.len())?;
        let dm = Self { data, size };
        if !dm.has_zero_diagonal() || !dm.is_symmetric() {
            return None;
        }
        Some(dm)
    }

    /// Returns the cost of the arc from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the row of costs leaving `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    pub fn row(&self, from: usize) -> &[u64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if every diagonal entry is zero.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| self.get(i, i) == 0)
    }

    /// Returns the cheapest unvisited location reachable from `from`.
    ///
    /// Ties go to the smallest index. Returns `None` once every location
    /// is visited. `visited` must hold one flag per location.
    pub(crate) fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<(usize, u64)> {
        debug_assert_eq!(visited.len(), self.size);
        let mut best: Option<(usize, u64)> = None;
        for (to, &cost) in self.row(from).iter().enumerate() {
            if visited[to] {
                continue;
            }
            match best {
                Some((_, best_cost)) if cost >= best_cost => {}
                _ => best = Some((to, cost)),
            }
        }
        best
    }
}
