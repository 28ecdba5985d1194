// crates/qthloc-core/src/distance.rs

//! # Great-circle geometry
//!
//! Spherical-Earth helpers. The locator grid is far coarser than the
//! error of the spherical model, so ellipsoidal flattening is ignored.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on Earth in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both components finite and inside [-90, 90] / [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    #[inline]
    pub fn distance_km(&self, other: &GeoCoordinate) -> f64 {
        distance_km(*self, *other)
    }

    #[inline]
    pub fn bearing_to(&self, other: &GeoCoordinate) -> f64 {
        initial_bearing_deg(*self, *other)
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    /// `(lat, lon)` tuple.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

/// Haversine great-circle distance in kilometres.
///
/// Symmetric, non-negative, and exactly `0.0` for identical inputs.
///
/// # Example
///
/// ```
/// use qthloc_core::distance::{distance_km, GeoCoordinate};
///
/// let berlin = GeoCoordinate::new(52.5, 13.0);
/// let vienna = GeoCoordinate::new(48.5, 17.0);
/// let d = distance_km(berlin, vienna);
/// assert!((d - 527.0).abs() < 1.0);
/// ```
pub fn distance_km(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial great-circle bearing from `a` towards `b`, degrees clockwise from
/// true north in `[0, 360)`. Returns `0.0` when the points coincide.
pub fn initial_bearing_deg(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let y = d_lon.sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * d_lon.cos();
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_for_identical_points() {
        let p = GeoCoordinate::new(48.2082, 16.3738);
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = GeoCoordinate::new(51.5074, -0.1278);
        let b = GeoCoordinate::new(-33.8688, 151.2093);
        assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = distance_km(GeoCoordinate::new(0.0, 0.0), GeoCoordinate::new(1.0, 0.0));
        assert_abs_diff_eq!(d, EARTH_RADIUS_KM.to_radians(), epsilon = 1e-9);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = distance_km(GeoCoordinate::new(0.0, 0.0), GeoCoordinate::new(0.0, 180.0));
        assert_abs_diff_eq!(d, std::f64::consts::PI * EARTH_RADIUS_KM, epsilon = 1e-6);
    }

    #[test]
    fn bearings_on_the_cardinal_points() {
        let origin = GeoCoordinate::new(0.0, 0.0);
        assert_abs_diff_eq!(origin.bearing_to(&GeoCoordinate::new(1.0, 0.0)), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.bearing_to(&GeoCoordinate::new(0.0, 1.0)), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.bearing_to(&GeoCoordinate::new(-1.0, 0.0)), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.bearing_to(&GeoCoordinate::new(0.0, -1.0)), 270.0, epsilon = 1e-9);
        assert_eq!(origin.bearing_to(&origin), 0.0);
    }

    #[test]
    fn range_check() {
        assert!(GeoCoordinate::new(90.0, -180.0).is_valid());
        assert!(!GeoCoordinate::new(90.5, 0.0).is_valid());
        assert!(!GeoCoordinate::new(0.0, f64::NAN).is_valid());
    }
}
