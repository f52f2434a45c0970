use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::evaluation::{EvaluationInput, MetricSet, PolicyChoice, RequestStamp};

pub const TOLERANCE: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

pub fn sample_input(policy_choice: PolicyChoice) -> EvaluationInput {
    EvaluationInput {
        policy_choice,
        company_name: "SampleCo".to_string(),
        currency: "GBP".to_string(),
        revenue: 1200.0,
        operating_profit: 180.0,
        profit_after_tax: 120.0,
        equity: 800.0,
        debt: 300.0,
        shares_outstanding: 100.0,
        tax_rate: 0.25,
        covenant_max_gearing: None,
    }
}

pub fn with_covenant(policy_choice: PolicyChoice, limit: f64) -> EvaluationInput {
    EvaluationInput {
        covenant_max_gearing: Some(limit),
        ..sample_input(policy_choice)
    }
}

pub fn fixed_stamp() -> RequestStamp {
    RequestStamp {
        request_id: Uuid::nil(),
        timestamp_utc: Utc
            .with_ymd_and_hms(2025, 3, 31, 12, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub fn metrics(eps: f64, gearing: f64) -> MetricSet {
    MetricSet {
        eps,
        gearing,
        bonus_estimate: 1.0,
        prudence_score: 5.0,
    }
}
