//! Core types for fraud scoring

use crate::config::DecisionThresholds;
use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Risk score (0-100, two decimal places)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64")]
pub struct RiskScore(f64);

impl RiskScore {
    /// Maximum possible score
    pub const MAX: RiskScore = RiskScore(100.0);

    /// Create new risk score, clamped to [0, 100] and rounded to 2 decimals
    pub fn new(raw: f64) -> Self {
        let clamped = raw.clamp(0.0, 100.0);
        Self((clamped * 100.0).round() / 100.0)
    }

    /// Get raw score
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for RiskScore {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categorical decision for a scored transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    /// Transaction may proceed
    Approved,
    /// Transaction proceeds but raises an alert
    Alert,
    /// Transaction is blocked
    Blocked,
}

impl Decision {
    /// Map a risk score to a decision using the given thresholds
    pub fn for_score(score: RiskScore, thresholds: &DecisionThresholds) -> Self {
        if score.value() >= thresholds.block {
            Decision::Blocked
        } else if score.value() >= thresholds.alert {
            Decision::Alert
        } else {
            Decision::Approved
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Decision::Approved => "APPROVED",
            Decision::Alert => "ALERT",
            Decision::Blocked => "BLOCKED",
        };
        f.write_str(s)
    }
}

/// Immutable input to the decision engine
///
/// Constructed fresh per evaluation; carries no persisted identity.
/// `time_diff_hours = 0.0` is the "no prior transaction" sentinel and
/// forces the velocity rule off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionContext {
    /// Transaction amount
    pub amount: Decimal,

    /// Great-circle distance from the user's previous location (km)
    pub distance_km: f64,

    /// Hours elapsed since the user's previous transaction
    pub time_diff_hours: f64,

    /// Transaction falls in the 23:00-06:59 night window
    pub is_night: bool,

    /// Fraud probability from the ML collaborator, in [0, 1]
    pub ml_probability: f64,
}

impl TransactionContext {
    /// Build a context, rejecting probabilities outside [0, 1]
    ///
    /// Out-of-range values are surfaced as errors, never silently
    /// corrected; callers wanting the defensive contract should clamp via
    /// [`crate::model::clamp_probability`] first.
    pub fn new(
        amount: Decimal,
        distance_km: f64,
        time_diff_hours: f64,
        is_night: bool,
        ml_probability: f64,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&ml_probability) {
            return Err(Error::ProbabilityOutOfRange(ml_probability));
        }
        Ok(Self {
            amount,
            distance_km,
            time_diff_hours,
            is_night,
            ml_probability,
        })
    }
}

/// Raw transaction as submitted by the caller, before feature extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Transaction amount
    pub amount: Decimal,

    /// User latitude (degrees)
    pub user_lat: f64,

    /// User longitude (degrees)
    pub user_lon: f64,

    /// Merchant latitude (degrees)
    pub merch_lat: f64,

    /// Merchant longitude (degrees)
    pub merch_lon: f64,

    /// ISO-8601 transaction timestamp
    pub timestamp: String,

    /// Hours since the user's previous transaction; `None` when there is
    /// no history
    #[serde(default)]
    pub time_diff_hours: Option<f64>,
}

impl TransactionRequest {
    /// User coordinates
    pub fn user_point(&self) -> GeoPoint {
        GeoPoint::new(self.user_lat, self.user_lon)
    }

    /// Merchant coordinates
    pub fn merchant_point(&self) -> GeoPoint {
        GeoPoint::new(self.merch_lat, self.merch_lon)
    }
}

/// Outcome of one engine evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudVerdict {
    /// Final risk score
    pub risk_score: RiskScore,

    /// Categorical decision
    pub decision: Decision,

    /// Labels of triggered rules, in evaluation order
    pub reasons: Vec<String>,

    /// Evaluation timestamp
    pub assessed_at: chrono::DateTime<chrono::Utc>,
}

impl FraudVerdict {
    /// Human-readable reason string: triggered labels joined with ", ",
    /// or "Normal transaction" when nothing fired
    pub fn reason_summary(&self) -> String {
        if self.reasons.is_empty() {
            "Normal transaction".to_string()
        } else {
            self.reasons.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecisionThresholds;

    #[test]
    fn test_risk_score_clamps() {
        assert_eq!(RiskScore::new(120.0).value(), 100.0);
        assert_eq!(RiskScore::new(-5.0).value(), 0.0);
        assert_eq!(RiskScore::new(42.424242).value(), 42.42);
    }

    #[test]
    fn test_decision_boundaries() {
        let t = DecisionThresholds::default();
        assert_eq!(Decision::for_score(RiskScore::new(49.99), &t), Decision::Approved);
        assert_eq!(Decision::for_score(RiskScore::new(50.0), &t), Decision::Alert);
        assert_eq!(Decision::for_score(RiskScore::new(79.99), &t), Decision::Alert);
        assert_eq!(Decision::for_score(RiskScore::new(80.0), &t), Decision::Blocked);
    }

    #[test]
    fn test_context_rejects_bad_probability() {
        let err = TransactionContext::new(Decimal::from(100), 0.0, 1.0, false, 1.5);
        assert!(matches!(err, Err(Error::ProbabilityOutOfRange(_))));

        let nan = TransactionContext::new(Decimal::from(100), 0.0, 1.0, false, f64::NAN);
        assert!(nan.is_err());
    }

    #[test]
    fn test_reason_summary() {
        let verdict = FraudVerdict {
            risk_score: RiskScore::new(0.0),
            decision: Decision::Approved,
            reasons: Vec::new(),
            assessed_at: chrono::Utc::now(),
        };
        assert_eq!(verdict.reason_summary(), "Normal transaction");

        let verdict = FraudVerdict {
            reasons: vec!["High amount".to_string(), "Night transaction".to_string()],
            ..verdict
        };
        assert_eq!(verdict.reason_summary(), "High amount, Night transaction");
    }
}
