//! Domain model types for single-vehicle tours.
//!
//! Provides labeled geographic points (with their coordinate-only equality
//! contract), the display coordinate shift, and closed routes as index
//! sequences with an integer cost.

mod point;
mod route;

pub use point::{CoordinateShift, GeoPoint};
pub use route::Route;
