//! Fraud decision engine
//!
//! Fuses the ML probability with the rule chain into a bounded risk score
//! and a categorical decision. `decide` is pure and total over its
//! documented domain; all validation happens at the edges.

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::model::ProbabilitySource;
use crate::rules::{self, RULE_CHAIN};
use crate::time::time_features;
use crate::types::{Decision, FraudVerdict, RiskScore, TransactionContext, TransactionRequest};
use tracing::{debug, info};

/// Fraud decision engine
#[derive(Debug, Clone, Default)]
pub struct FraudEngine {
    config: EngineConfig,
}

impl FraudEngine {
    /// Create an engine after validating the configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score a transaction context
    ///
    /// Evaluation order: hard limit short-circuit, ML base score, then the
    /// rule chain in its fixed order. The final score is clamped to
    /// [0, 100] and rounded to two decimals before the decision thresholds
    /// are applied.
    pub fn decide(&self, ctx: &TransactionContext) -> FraudVerdict {
        if ctx.amount >= self.config.hard_limit.amount {
            info!(amount = %ctx.amount, "transaction exceeds hard limit, blocking");
            return FraudVerdict {
                risk_score: RiskScore::MAX,
                decision: Decision::Blocked,
                reasons: vec![rules::LABEL_HARD_LIMIT.to_string()],
                assessed_at: chrono::Utc::now(),
            };
        }

        let base = ctx.ml_probability * 100.0 * self.config.ml_weight.weight;

        let (total, reasons) = RULE_CHAIN.iter().fold(
            (base, Vec::new()),
            |(score, mut reasons), rule| match rule(ctx, &self.config) {
                Some(hit) => {
                    debug!(label = hit.label, points = hit.points, "rule triggered");
                    reasons.push(hit.label.to_string());
                    (score + hit.points, reasons)
                }
                None => (score, reasons),
            },
        );

        let risk_score = RiskScore::new(total);
        let decision = Decision::for_score(risk_score, &self.config.decision);

        info!(score = %risk_score, %decision, "transaction scored");

        FraudVerdict {
            risk_score,
            decision,
            reasons,
            assessed_at: chrono::Utc::now(),
        }
    }

    /// Score a raw transaction request end to end
    ///
    /// Derives the location change from the user and merchant coordinates,
    /// the night flag from the timestamp, and the fraud probability from
    /// the collaborator. A failing probability source surfaces as
    /// [`Error::ModelUnavailable`] before the engine runs; it is never
    /// treated as probability zero.
    pub async fn score_transaction(
        &self,
        req: &TransactionRequest,
        model: &impl ProbabilitySource,
    ) -> Result<FraudVerdict> {
        let features = time_features(&req.timestamp)?;
        let distance_km = req.user_point().distance_km(&req.merchant_point());
        let probability = model
            .predict(req.amount, req.user_point(), req.merchant_point(), &req.timestamp)
            .await
            .map_err(|e| Error::ModelUnavailable(e.to_string()))?;

        let ctx = TransactionContext::new(
            req.amount,
            distance_km,
            req.time_diff_hours.unwrap_or(0.0),
            features.is_night,
            probability,
        )?;

        Ok(self.decide(&ctx))
    }
}
