//! Rule chain for the decision engine
//!
//! Each rule is a pure evaluator over the transaction context; the engine
//! folds the chain in order, so insertion order of hits is evaluation
//! order. Tiered rules check the high tier first and fire at most once.

use crate::config::EngineConfig;
use crate::types::TransactionContext;

/// Reason label for the hard transaction limit
pub const LABEL_HARD_LIMIT: &str = "Exceeded maximum bank transaction limit";
/// Reason label for the very-high amount tier
pub const LABEL_VERY_HIGH_AMOUNT: &str = "Very high amount";
/// Reason label for the high amount tier
pub const LABEL_HIGH_AMOUNT: &str = "High amount";
/// Reason label for physically impossible travel
pub const LABEL_IMPOSSIBLE_SPEED: &str = "Impossible travel speed";
/// Reason label for suspicious travel
pub const LABEL_SUSPICIOUS_SPEED: &str = "Suspicious travel speed";
/// Reason label for a very large location change
pub const LABEL_VERY_LARGE_DISTANCE: &str = "Very large location change";
/// Reason label for a large location change
pub const LABEL_LARGE_DISTANCE: &str = "Large location change";
/// Reason label for the night window
pub const LABEL_NIGHT: &str = "Night transaction";
/// Reason label for a high amount inside the night window
pub const LABEL_NIGHT_AMOUNT: &str = "High amount at night";

/// A triggered rule: points to add and the reason label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleHit {
    /// Points added to the risk score
    pub points: f64,

    /// Reason label recorded on the verdict
    pub label: &'static str,
}

/// A single rule evaluator
pub type Rule = fn(&TransactionContext, &EngineConfig) -> Option<RuleHit>;

/// The ordered rule chain the engine folds over
pub const RULE_CHAIN: [Rule; 5] = [
    amount_risk,
    velocity_risk,
    distance_risk,
    night_risk,
    night_amount_risk,
];

/// Implied travel speed in km/h
///
/// Zero elapsed time means "no prior reference point" and maps to zero
/// speed, not infinite speed.
pub fn speed_kmh(ctx: &TransactionContext) -> f64 {
    if ctx.time_diff_hours > 0.0 {
        ctx.distance_km / ctx.time_diff_hours
    } else {
        0.0
    }
}

/// Amount tiers: very high, then high
pub fn amount_risk(ctx: &TransactionContext, cfg: &EngineConfig) -> Option<RuleHit> {
    if ctx.amount >= cfg.amount.very_high_threshold {
        Some(RuleHit {
            points: cfg.amount.very_high_points,
            label: LABEL_VERY_HIGH_AMOUNT,
        })
    } else if ctx.amount >= cfg.amount.high_threshold {
        Some(RuleHit {
            points: cfg.amount.high_points,
            label: LABEL_HIGH_AMOUNT,
        })
    } else {
        None
    }
}

/// Geo-velocity tiers: impossible, then suspicious
pub fn velocity_risk(ctx: &TransactionContext, cfg: &EngineConfig) -> Option<RuleHit> {
    let speed = speed_kmh(ctx);
    if speed > cfg.velocity.impossible_kmh {
        Some(RuleHit {
            points: cfg.velocity.impossible_points,
            label: LABEL_IMPOSSIBLE_SPEED,
        })
    } else if speed > cfg.velocity.suspicious_kmh {
        Some(RuleHit {
            points: cfg.velocity.suspicious_points,
            label: LABEL_SUSPICIOUS_SPEED,
        })
    } else {
        None
    }
}

/// Location-change tiers: very large, then large (independent of velocity)
pub fn distance_risk(ctx: &TransactionContext, cfg: &EngineConfig) -> Option<RuleHit> {
    if ctx.distance_km > cfg.distance.very_large_km {
        Some(RuleHit {
            points: cfg.distance.very_large_points,
            label: LABEL_VERY_LARGE_DISTANCE,
        })
    } else if ctx.distance_km > cfg.distance.large_km {
        Some(RuleHit {
            points: cfg.distance.large_points,
            label: LABEL_LARGE_DISTANCE,
        })
    } else {
        None
    }
}

/// Flat surcharge for the night window
pub fn night_risk(ctx: &TransactionContext, cfg: &EngineConfig) -> Option<RuleHit> {
    if ctx.is_night {
        Some(RuleHit {
            points: cfg.night.points,
            label: LABEL_NIGHT,
        })
    } else {
        None
    }
}

/// Extra surcharge for high amounts inside the night window
///
/// Fires in addition to [`night_risk`], never instead of it.
pub fn night_amount_risk(ctx: &TransactionContext, cfg: &EngineConfig) -> Option<RuleHit> {
    if ctx.is_night && ctx.amount > cfg.amount.night_threshold {
        Some(RuleHit {
            points: cfg.night.high_amount_points,
            label: LABEL_NIGHT_AMOUNT,
        })
    } else {
        None
    }
}
