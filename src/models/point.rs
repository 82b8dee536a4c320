//! Geographic point and coordinate shift types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed additive offsets applied to every latitude and longitude.
///
/// Used to normalise coordinates for display. Shifting both endpoints of an
/// arc by the same amount leaves the planar distance unchanged, so the
/// distance matrix is always computed from the raw coordinates and never
/// from shifted ones.
///
/// # Examples
///
/// ```
/// use u_tour::models::CoordinateShift;
///
/// let shift = CoordinateShift::new(1.0, -2.0);
/// assert_eq!(shift.lat(), 1.0);
/// assert_eq!(shift.long(), -2.0);
///
/// let default = CoordinateShift::default();
/// assert_eq!(default.lat(), -34.928585);
/// assert_eq!(default.long(), 138.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateShift {
    lat: f64,
    long: f64,
}

impl CoordinateShift {
    /// Latitude offset used when no shift is configured.
    pub const DEFAULT_LAT: f64 = -34.928585;
    /// Longitude offset used when no shift is configured.
    pub const DEFAULT_LONG: f64 = 138.6;

    /// Creates a shift with the given latitude and longitude offsets.
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    /// Latitude offset.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude offset.
    pub fn long(&self) -> f64 {
        self.long
    }
}

impl Default for CoordinateShift {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LAT, Self::DEFAULT_LONG)
    }
}

/// A labeled geographic location with an informational weight.
///
/// Equality compares latitude and longitude only: two points with different
/// labels or weights at the same coordinates are equal. The solver still
/// treats them as distinct indices.
///
/// # Examples
///
/// ```
/// use u_tour::models::GeoPoint;
///
/// let a = GeoPoint::new("Depot", 0.0, 0.0, 0.0);
/// let b = GeoPoint::new("Warehouse", 0.0, 0.0, 12.5);
/// assert_eq!(a, b);
///
/// let c = GeoPoint::new("Shop", 3.0, 4.0, 1.0);
/// assert!((a.distance_to(&c) - 5.0).abs() < 1e-10);
/// assert_eq!(c.to_string(), "Shop");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoPoint {
    label: String,
    lat: f64,
    long: f64,
    weight: f64,
}

impl GeoPoint {
    /// Creates a new point.
    pub fn new(label: impl Into<String>, lat: f64, long: f64, weight: f64) -> Self {
        Self {
            label: label.into(),
            lat,
            long,
            weight,
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Latitude.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude.
    pub fn long(&self) -> f64 {
        self.long
    }

    /// Informational weight, carried through but never used for cost.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.long.is_finite()
    }

    /// Planar Euclidean distance to another point, treating latitude and
    /// longitude as plane coordinates.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlong = self.long - other.long;
        (dlat * dlat + dlong * dlong).sqrt()
    }

    /// Returns a copy of this point with the shift added to its coordinates.
    pub fn shifted(&self, shift: &CoordinateShift) -> GeoPoint {
        Self {
            label: self.label.clone(),
            lat: self.lat + shift.lat(),
            long: self.long + shift.long(),
            weight: self.weight,
        }
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.lat == other.lat && self.long == other.long
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = GeoPoint::new("Rundle Mall", -34.92, 138.60, 7.0);
        assert_eq!(p.label(), "Rundle Mall");
        assert_eq!(p.lat(), -34.92);
        assert_eq!(p.long(), 138.60);
        assert_eq!(p.weight(), 7.0);
        assert!(p.is_finite());
    }

    #[test]
    fn test_equality_ignores_label_and_weight() {
        let a = GeoPoint::new("A", 1.5, 2.5, 1.0);
        let b = GeoPoint::new("B", 1.5, 2.5, 99.0);
        let c = GeoPoint::new("A", 1.5, 2.6, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_distance() {
        let a = GeoPoint::new("a", 0.0, 0.0, 0.0);
        let b = GeoPoint::new("b", 0.0, 3.0, 0.0);
        let c = GeoPoint::new("c", 4.0, 0.0, 0.0);
        assert!((a.distance_to(&b) - 3.0).abs() < 1e-10);
        assert!((a.distance_to(&c) - 4.0).abs() < 1e-10);
        assert!((b.distance_to(&c) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = GeoPoint::new("a", -34.9, 138.5, 0.0);
        let b = GeoPoint::new("b", -35.1, 138.7, 0.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_distance_zero_iff_equal() {
        let a = GeoPoint::new("a", 2.0, 2.0, 0.0);
        let b = GeoPoint::new("b", 2.0, 2.0, 5.0);
        assert_eq!(a.distance_to(&b), 0.0);
        let c = GeoPoint::new("c", 2.0, 2.0 + 1e-9, 0.0);
        assert!(a.distance_to(&c) > 0.0);
    }

    #[test]
    fn test_non_finite() {
        assert!(!GeoPoint::new("nan", f64::NAN, 0.0, 0.0).is_finite());
        assert!(!GeoPoint::new("inf", 0.0, f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_shifted() {
        let p = GeoPoint::new("p", 1.0, 2.0, 3.0);
        let shifted = p.shifted(&CoordinateShift::new(10.0, -20.0));
        assert_eq!(shifted.lat(), 11.0);
        assert_eq!(shifted.long(), -18.0);
        assert_eq!(shifted.label(), "p");
        assert_eq!(shifted.weight(), 3.0);
        // Shifting returns a copy.
        assert_eq!(p.lat(), 1.0);
    }

    #[test]
    fn test_shift_preserves_distance() {
        let shift = CoordinateShift::default();
        let a = GeoPoint::new("a", 0.25, 0.5, 0.0);
        let b = GeoPoint::new("b", 0.75, 1.5, 0.0);
        let before = a.distance_to(&b);
        let after = a.shifted(&shift).distance_to(&b.shifted(&shift));
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn test_display_is_label() {
        let p = GeoPoint::new("Victoria Square", 0.0, 0.0, 0.0);
        assert_eq!(format!("{p}"), "Victoria Square");
    }
}
