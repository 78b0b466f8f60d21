//! Great-circle distance utilities

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude (degrees)
    pub lat: f64,

    /// Longitude (degrees)
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point from degrees
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another point, in km
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Haversine great-circle distance between two points, in km
///
/// Inputs are degrees. Coordinates are not range-checked; malformed input
/// (e.g. NaN) propagates numerically.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_same_point() {
        assert_eq!(haversine(19.0760, 72.8777, 19.0760, 72.8777), 0.0);
    }

    #[test]
    fn test_known_distance_london_new_york() {
        // London (51.5074, -0.1278) to New York (40.7128, -74.0060)
        let d = haversine(51.5074, -0.1278, 40.7128, -74.0060);
        assert!((d - 5570.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn test_known_distance_mumbai_delhi() {
        let d = haversine(19.0760, 72.8777, 28.6139, 77.2090);
        assert!((d - 1150.0).abs() < 20.0, "got {d}");
    }

    #[test]
    fn test_symmetric() {
        let ab = haversine(10.0, 20.0, 30.0, 40.0);
        let ba = haversine(30.0, 40.0, 10.0, 20.0);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(haversine(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_geo_point_wrapper() {
        let a = GeoPoint::new(51.5074, -0.1278);
        let b = GeoPoint::new(40.7128, -74.0060);
        assert_eq!(a.distance_km(&b), haversine(a.lat, a.lon, b.lat, b.lon));
    }
}
