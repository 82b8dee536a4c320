//! # u-tour
//!
//! Single-vehicle closed tours over labeled geographic points: an integer
//! distance matrix built from planar coordinates and a greedy
//! path-cheapest-arc tour constructed over it.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (GeoPoint, CoordinateShift, Route)
//! - [`distance`] — Truncated integer distance matrix
//! - [`constructive`] — Path-cheapest-arc tour construction
//! - [`evaluation`] — Route cost re-accumulation and structural checks
//! - [`report`] — Route projection onto points for external formatting
//! - [`solver`] — Points → matrix → route → report pipeline
//! - [`error`] — Error type and result alias

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod report;
pub mod solver;

pub use error::{Result, TourError};
