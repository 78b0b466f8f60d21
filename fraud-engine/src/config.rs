//! Engine configuration
//!
//! Thresholds and points for every rule in the chain. Defaults carry the
//! production rule set; deployments can override individual values from a
//! TOML file.

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Amount at or above which a transaction is blocked outright
    pub hard_limit: HardLimit,

    /// Weight of the ML probability in the base score
    pub ml_weight: MlWeight,

    /// Amount rule tiers
    pub amount: AmountRules,

    /// Geo-velocity rule tiers
    pub velocity: VelocityRules,

    /// Location-change rule tiers
    pub distance: DistanceRules,

    /// Night-window rules
    pub night: NightRules,

    /// Score thresholds for the final decision
    pub decision: DecisionThresholds,
}

/// Hard transaction limit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HardLimit {
    /// Blocking threshold (inclusive)
    pub amount: Decimal,
}

impl Default for HardLimit {
    fn default() -> Self {
        Self {
            amount: Decimal::from(500_000),
        }
    }
}

/// ML contribution weight
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MlWeight {
    /// Fraction of the 100-point scale the ML signal may contribute
    pub weight: f64,
}

impl Default for MlWeight {
    fn default() -> Self {
        Self { weight: 0.4 }
    }
}

/// Amount rule tiers (mutually exclusive, high tier first)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountRules {
    /// Very-high tier threshold (inclusive)
    pub very_high_threshold: Decimal,

    /// Points added by the very-high tier
    pub very_high_points: f64,

    /// High tier threshold (inclusive)
    pub high_threshold: Decimal,

    /// Points added by the high tier
    pub high_points: f64,

    /// Amount above which the night surcharge applies (exclusive)
    pub night_threshold: Decimal,
}

impl Default for AmountRules {
    fn default() -> Self {
        Self {
            very_high_threshold: Decimal::from(300_000),
            very_high_points: 40.0,
            high_threshold: Decimal::from(150_000),
            high_points: 25.0,
            night_threshold: Decimal::from(100_000),
        }
    }
}

/// Geo-velocity rule tiers (mutually exclusive, high tier first)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityRules {
    /// Speed above which travel is physically impossible (km/h, exclusive)
    pub impossible_kmh: f64,

    /// Points added for impossible travel
    pub impossible_points: f64,

    /// Speed above which travel is suspicious (km/h, exclusive)
    pub suspicious_kmh: f64,

    /// Points added for suspicious travel
    pub suspicious_points: f64,
}

impl Default for VelocityRules {
    fn default() -> Self {
        Self {
            impossible_kmh: 900.0,
            impossible_points: 50.0,
            suspicious_kmh: 500.0,
            suspicious_points: 30.0,
        }
    }
}

/// Location-change rule tiers (mutually exclusive, high tier first)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceRules {
    /// Very-large location change threshold (km, exclusive)
    pub very_large_km: f64,

    /// Points added for a very large change
    pub very_large_points: f64,

    /// Large location change threshold (km, exclusive)
    pub large_km: f64,

    /// Points added for a large change
    pub large_points: f64,
}

impl Default for DistanceRules {
    fn default() -> Self {
        Self {
            very_large_km: 4000.0,
            very_large_points: 30.0,
            large_km: 2000.0,
            large_points: 20.0,
        }
    }
}

/// Night-window rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NightRules {
    /// Points added for any night transaction
    pub points: f64,

    /// Additional points when the amount exceeds the night threshold
    pub high_amount_points: f64,
}

impl Default for NightRules {
    fn default() -> Self {
        Self {
            points: 15.0,
            high_amount_points: 15.0,
        }
    }
}

/// Decision thresholds over the final score
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionThresholds {
    /// Score at or above which the transaction is blocked
    pub block: f64,

    /// Score at or above which an alert is raised
    pub alert: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            block: 80.0,
            alert: 50.0,
        }
    }
}

impl EngineConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&raw)
    }

    /// Check tier ordering and ranges
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.ml_weight.weight) {
            return Err(Error::InvalidConfig(format!(
                "ml_weight {} outside [0, 1]",
                self.ml_weight.weight
            )));
        }
        if self.amount.very_high_threshold <= self.amount.high_threshold {
            return Err(Error::InvalidConfig(
                "amount.very_high_threshold must exceed amount.high_threshold".to_string(),
            ));
        }
        if self.hard_limit.amount < self.amount.very_high_threshold {
            return Err(Error::InvalidConfig(
                "hard_limit.amount must be at least amount.very_high_threshold".to_string(),
            ));
        }
        if self.velocity.impossible_kmh <= self.velocity.suspicious_kmh {
            return Err(Error::InvalidConfig(
                "velocity.impossible_kmh must exceed velocity.suspicious_kmh".to_string(),
            ));
        }
        if self.distance.very_large_km <= self.distance.large_km {
            return Err(Error::InvalidConfig(
                "distance.very_large_km must exceed distance.large_km".to_string(),
            ));
        }
        if self.decision.block <= self.decision.alert {
            return Err(Error::InvalidConfig(
                "decision.block must exceed decision.alert".to_string(),
            ));
        }
        Ok(())
    }
}
