//! Error types for tour construction.

use thiserror::Error;

/// Errors returned by matrix construction, route construction and reporting.
///
/// Every variant is detected synchronously and reported to the caller; no
/// partial matrix or route is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// No points (or a zero-size matrix) were supplied.
    #[error("point set is empty")]
    EmptyInput,

    /// A latitude or longitude is NaN or infinite.
    #[error("point {index} ({label}) has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in input order.
        index: usize,
        /// Label of the offending point.
        label: String,
    },

    /// The depot index does not address a point.
    #[error("depot index {depot} is out of range for {size} points")]
    DepotOutOfRange {
        /// Requested depot index.
        depot: usize,
        /// Number of points.
        size: usize,
    },

    /// The distance precision factor is not finite and positive.
    #[error("scale factor must be finite and positive, got {scale}")]
    InvalidScale {
        /// Rejected scale factor.
        scale: f64,
    },

    /// A route refers to a point index that does not exist.
    #[error("index {index} is out of range for {size} points")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of points.
        size: usize,
    },

    /// The accumulated tour cost does not fit in a `u64`.
    #[error("tour cost overflowed")]
    CostOverflow,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(TourError::EmptyInput.to_string(), "point set is empty");
        let err = TourError::NonFiniteCoordinate {
            index: 2,
            label: "Glenelg".to_string(),
        };
        assert!(err.to_string().contains("Glenelg"));
        let err = TourError::DepotOutOfRange { depot: 5, size: 3 };
        assert_eq!(err.to_string(), "depot index 5 is out of range for 3 points");
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> Result<()> {
            Err(TourError::CostOverflow)
        }
        assert_eq!(fails(), Err(TourError::CostOverflow));
    }
}
