//! Geolocation capability
//!
//! The host resolves a client IP to coordinates before scoring. The trait
//! keeps that lookup out of the engine so evaluations stay deterministic
//! under test; implementations own their timeout policy and must degrade
//! to a fallback location instead of failing the transaction.

use crate::error::Result;
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// A resolved location: coordinates plus a display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Coordinates
    pub point: GeoPoint,

    /// Human-readable label, e.g. "Mumbai, India"
    pub label: String,
}

impl GeoLocation {
    /// Fallback location used when a lookup fails: origin coordinates,
    /// labeled "Unknown"
    pub fn unknown() -> Self {
        Self {
            point: GeoPoint::new(0.0, 0.0),
            label: "Unknown".to_string(),
        }
    }
}

/// Resolve an IP address to a location
pub trait Geolocator {
    /// Look up the location for an IP address
    ///
    /// Implementations degrade to [`GeoLocation::unknown`] on lookup
    /// failure rather than returning an error; `Err` is reserved for
    /// misconfiguration.
    async fn locate(&self, ip: &str) -> Result<GeoLocation>;
}

/// Geolocator returning a fixed location for every IP
///
/// Deterministic stand-in for tests and single-region deployments.
#[derive(Debug, Clone)]
pub struct StaticGeolocator {
    location: GeoLocation,
}

impl StaticGeolocator {
    /// Always resolve to the given location
    pub fn new(location: GeoLocation) -> Self {
        Self { location }
    }
}

impl Default for StaticGeolocator {
    fn default() -> Self {
        Self::new(GeoLocation::unknown())
    }
}

impl Geolocator for StaticGeolocator {
    async fn locate(&self, _ip: &str) -> Result<GeoLocation> {
        Ok(self.location.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_geolocator() {
        let home = GeoLocation {
            point: GeoPoint::new(19.0760, 72.8777),
            label: "Mumbai, India".to_string(),
        };
        let geo = StaticGeolocator::new(home.clone());

        assert_eq!(geo.locate("203.0.113.7").await.unwrap(), home);
        assert_eq!(geo.locate("198.51.100.1").await.unwrap(), home);
    }

    #[tokio::test]
    async fn test_default_is_unknown() {
        let geo = StaticGeolocator::default();
        let loc = geo.locate("203.0.113.7").await.unwrap();
        assert_eq!(loc.label, "Unknown");
        assert_eq!(loc.point, GeoPoint::new(0.0, 0.0));
    }
}
