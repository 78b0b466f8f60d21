//! ML probability collaborator
//!
//! The engine treats the classifier as an opaque source of a fraud
//! probability in [0, 1]. Production deployments back this trait with a
//! trained model behind an inference service; [`HeuristicModel`] is the
//! deterministic stand-in for tests, demos and degraded operation.

use crate::error::Result;
use crate::geo::GeoPoint;
use crate::time::time_features;
use rust_decimal::Decimal;

/// Source of a fraud probability for a transaction
///
/// Implementations must return a value in [0, 1] (use
/// [`clamp_probability`] before returning) and surface upstream failures
/// as errors rather than mapping them to probability zero.
pub trait ProbabilitySource {
    /// Predict the fraud probability for a transaction
    async fn predict(
        &self,
        amount: Decimal,
        user: GeoPoint,
        merchant: GeoPoint,
        timestamp: &str,
    ) -> Result<f64>;
}

/// Clamp a raw model output into [0, 1]
///
/// NaN maps to zero. Defensive caller-side helper; the engine itself
/// rejects out-of-range probabilities instead of correcting them.
pub fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Deterministic stand-in for the trained classifier
///
/// Scores the same feature set the production model was trained on
/// (amount, distance, night window) with fixed weights, so engine behavior
/// stays reproducible without an inference service.
#[derive(Debug, Clone)]
pub struct HeuristicModel {
    base: f64,
    distance_weight: f64,
    night_weight: f64,
    amount_weight: f64,
    distance_km: f64,
    amount: Decimal,
}

impl Default for HeuristicModel {
    fn default() -> Self {
        Self {
            base: 0.05,
            distance_weight: 0.45,
            night_weight: 0.25,
            amount_weight: 0.35,
            distance_km: 4000.0,
            amount: Decimal::from(80_000),
        }
    }
}

impl ProbabilitySource for HeuristicModel {
    async fn predict(
        &self,
        amount: Decimal,
        user: GeoPoint,
        merchant: GeoPoint,
        timestamp: &str,
    ) -> Result<f64> {
        let features = time_features(timestamp)?;
        let distance = user.distance_km(&merchant);

        let mut p = self.base;
        if distance > self.distance_km {
            p += self.distance_weight;
        }
        if features.is_night {
            p += self.night_weight;
        }
        if amount > self.amount {
            p += self.amount_weight;
        }

        Ok(clamp_probability(p))
    }
}
