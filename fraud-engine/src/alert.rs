//! Alerting policy
//!
//! Decides whether a verdict warrants an alert and builds the alert
//! record. Delivery and storage belong to the host.

use crate::types::{Decision, FraudVerdict, RiskScore};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// When to raise an alert for a verdict
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertPolicy {
    /// Alert when the score reaches this value, regardless of decision.
    /// `None` alerts on every non-approved decision.
    pub min_score: Option<f64>,
}

impl AlertPolicy {
    /// Alert on any non-approved decision
    pub fn on_non_approved() -> Self {
        Self { min_score: None }
    }

    /// Alert at or above a score threshold
    pub fn with_min_score(min_score: f64) -> Self {
        Self {
            min_score: Some(min_score),
        }
    }

    /// Should this verdict raise an alert?
    pub fn should_alert(&self, verdict: &FraudVerdict) -> bool {
        match self.min_score {
            Some(threshold) => verdict.risk_score.value() >= threshold,
            None => verdict.decision != Decision::Approved,
        }
    }

    /// Build an alert for the verdict if the policy triggers
    pub fn evaluate(&self, verdict: &FraudVerdict) -> Option<Alert> {
        if !self.should_alert(verdict) {
            return None;
        }
        let alert = Alert::for_verdict(verdict);
        warn!(score = %alert.risk_score, id = %alert.id, "suspicious transaction alert");
        Some(alert)
    }
}

/// An alert raised for a suspicious transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Alert identity
    pub id: Uuid,

    /// Score of the offending verdict
    pub risk_score: RiskScore,

    /// Alert message for display
    pub message: String,

    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Alert {
    /// Build an alert record for a verdict
    pub fn for_verdict(verdict: &FraudVerdict) -> Self {
        Self {
            id: Uuid::new_v4(),
            risk_score: verdict.risk_score,
            message: format!(
                "Suspicious transaction! Risk score: {}%",
                verdict.risk_score
            ),
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(score: f64, decision: Decision) -> FraudVerdict {
        FraudVerdict {
            risk_score: RiskScore::new(score),
            decision,
            reasons: Vec::new(),
            assessed_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_default_policy_follows_decision() {
        let policy = AlertPolicy::on_non_approved();

        assert!(!policy.should_alert(&verdict(49.0, Decision::Approved)));
        assert!(policy.should_alert(&verdict(55.0, Decision::Alert)));
        assert!(policy.should_alert(&verdict(100.0, Decision::Blocked)));
    }

    #[test]
    fn test_score_threshold_policy() {
        let policy = AlertPolicy::with_min_score(70.0);

        // Decision is ignored in threshold mode
        assert!(!policy.should_alert(&verdict(55.0, Decision::Alert)));
        assert!(policy.should_alert(&verdict(70.0, Decision::Alert)));
        assert!(policy.should_alert(&verdict(95.0, Decision::Blocked)));
    }

    #[test]
    fn test_alert_message() {
        let alert = AlertPolicy::on_non_approved()
            .evaluate(&verdict(82.5, Decision::Blocked))
            .unwrap();
        assert_eq!(alert.message, "Suspicious transaction! Risk score: 82.5%");
        assert_eq!(alert.risk_score.value(), 82.5);
    }

    #[test]
    fn test_no_alert_when_quiet() {
        let policy = AlertPolicy::on_non_approved();
        assert!(policy.evaluate(&verdict(4.0, Decision::Approved)).is_none());
    }
}
