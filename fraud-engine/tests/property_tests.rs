//! Property-based tests for engine invariants
//!
//! - The risk score is always within [0, 100]
//! - The hard limit overrides every other signal
//! - The decision is a pure function of the score thresholds
//! - Reasons always appear in rule-chain order
//! - A missing history reference never yields a velocity penalty

use fraud_engine::{
    rules, Decision, EngineConfig, FraudEngine, TransactionContext,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Canonical label order as the rule chain emits them
const LABEL_ORDER: [&str; 9] = [
    rules::LABEL_HARD_LIMIT,
    rules::LABEL_VERY_HIGH_AMOUNT,
    rules::LABEL_HIGH_AMOUNT,
    rules::LABEL_IMPOSSIBLE_SPEED,
    rules::LABEL_SUSPICIOUS_SPEED,
    rules::LABEL_VERY_LARGE_DISTANCE,
    rules::LABEL_LARGE_DISTANCE,
    rules::LABEL_NIGHT,
    rules::LABEL_NIGHT_AMOUNT,
];

fn engine() -> FraudEngine {
    FraudEngine::new(EngineConfig::default()).unwrap()
}

/// Strategy for transaction amounts, spanning every rule tier
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..2_000_000).prop_map(Decimal::from)
}

/// Strategy for full contexts over the engine's documented domain
fn context_strategy() -> impl Strategy<Value = TransactionContext> {
    (
        amount_strategy(),
        0.0f64..20_000.0,
        0.0f64..72.0,
        any::<bool>(),
        0.0f64..=1.0,
    )
        .prop_map(|(amount, distance_km, time_diff_hours, is_night, p)| {
            TransactionContext::new(amount, distance_km, time_diff_hours, is_night, p).unwrap()
        })
}

proptest! {
    #[test]
    fn score_always_within_bounds(ctx in context_strategy()) {
        let verdict = engine().decide(&ctx);
        let score = verdict.risk_score.value();
        prop_assert!((0.0..=100.0).contains(&score), "score {score} out of bounds");
    }

    #[test]
    fn hard_limit_always_blocks(
        extra in 0i64..10_000_000,
        distance_km in 0.0f64..20_000.0,
        time_diff_hours in 0.0f64..72.0,
        is_night in any::<bool>(),
        p in 0.0f64..=1.0,
    ) {
        let amount = Decimal::from(500_000 + extra);
        let ctx = TransactionContext::new(amount, distance_km, time_diff_hours, is_night, p)
            .unwrap();
        let verdict = engine().decide(&ctx);

        prop_assert_eq!(verdict.decision, Decision::Blocked);
        prop_assert_eq!(verdict.risk_score.value(), 100.0);
        prop_assert_eq!(&verdict.reasons, &vec![rules::LABEL_HARD_LIMIT.to_string()]);
    }

    #[test]
    fn decision_is_pure_function_of_score(ctx in context_strategy()) {
        let config = EngineConfig::default();
        let verdict = engine().decide(&ctx);
        let score = verdict.risk_score.value();

        let expected = if score >= config.decision.block {
            Decision::Blocked
        } else if score >= config.decision.alert {
            Decision::Alert
        } else {
            Decision::Approved
        };
        prop_assert_eq!(verdict.decision, expected);
    }

    #[test]
    fn reasons_follow_rule_chain_order(ctx in context_strategy()) {
        let verdict = engine().decide(&ctx);

        let positions: Vec<usize> = verdict
            .reasons
            .iter()
            .map(|r| {
                LABEL_ORDER
                    .iter()
                    .position(|l| l == r)
                    .expect("unknown reason label")
            })
            .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(positions.len(), sorted.len(), "duplicate reason");
        prop_assert_eq!(positions, sorted, "reasons out of evaluation order");
    }

    #[test]
    fn zero_elapsed_time_never_penalizes_velocity(
        amount in 0i64..500_000,
        distance_km in 0.0f64..20_000.0,
        is_night in any::<bool>(),
        p in 0.0f64..=1.0,
    ) {
        let ctx = TransactionContext::new(Decimal::from(amount), distance_km, 0.0, is_night, p)
            .unwrap();
        let verdict = engine().decide(&ctx);

        prop_assert!(!verdict
            .reasons
            .iter()
            .any(|r| r == rules::LABEL_IMPOSSIBLE_SPEED || r == rules::LABEL_SUSPICIOUS_SPEED));
    }

    #[test]
    fn empty_reasons_means_normal_summary(ctx in context_strategy()) {
        let verdict = engine().decide(&ctx);
        if verdict.reasons.is_empty() {
            prop_assert_eq!(verdict.reason_summary(), "Normal transaction");
        } else {
            prop_assert_eq!(verdict.reason_summary(), verdict.reasons.join(", "));
        }
    }
}
