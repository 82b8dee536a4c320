//! Integer distance matrices.
//!
//! Converts planar distances between points into truncated integer arc
//! costs held in a dense matrix.

mod matrix;

pub use matrix::{scale_distance, DistanceMatrix, MatrixConfig, DEFAULT_SCALE};
