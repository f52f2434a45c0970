//! Scenario metrics and stakeholder narratives for one accounting policy choice.
//!
//! [`evaluate`] is the single entry point: it builds the base case and both
//! policy options, narrates the deltas for each stakeholder group and stamps
//! the result with a request id and timestamp. Everything below it is pure.

pub mod domain;
pub mod metrics;
pub mod narrative;
pub mod policy;
pub mod request;
pub mod router;
pub mod scenarios;

#[cfg(test)]
mod tests;

pub use domain::{Adjustment, EvaluationInput, FinancialPosition, PolicyChoice, StakeholderRole};
pub use metrics::{compute_metrics, MetricSet};
pub use narrative::{narrate, CovenantStatus, Direction, StakeholderImpact, StakeholderImpacts};
pub use policy::PolicyProfile;
pub use request::{EvaluationRequest, InputError};
pub use router::evaluation_router;
pub use scenarios::{build_scenarios, Scenario, ScenarioResult, ScenarioSet};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// Identity attached to a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestStamp {
    pub request_id: Uuid,
    pub timestamp_utc: DateTime<Utc>,
}

impl RequestStamp {
    pub fn fresh() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            timestamp_utc: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseMetadata {
    pub request_id: Uuid,
    pub timestamp_utc: DateTime<Utc>,
    pub company_name: String,
    pub policy_choice: PolicyChoice,
    pub currency: String,
}

/// Complete evaluation output handed back to the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub metadata: ResponseMetadata,
    pub base_case: ScenarioResult,
    pub option_a: ScenarioResult,
    pub option_b: ScenarioResult,
    pub stakeholders: StakeholderImpacts,
}

/// Evaluate a policy choice with a fresh request id and the current UTC time.
pub fn evaluate(input: &EvaluationInput) -> EvaluationResult {
    evaluate_with(input, RequestStamp::fresh())
}

pub fn evaluate_with(input: &EvaluationInput, stamp: RequestStamp) -> EvaluationResult {
    let scenarios = build_scenarios(input);
    let stakeholders = narrate(
        input.policy_choice,
        &scenarios.base.metrics,
        &scenarios.option_a.metrics,
        &scenarios.option_b.metrics,
        input.covenant_max_gearing,
    );

    debug!(
        request_id = %stamp.request_id,
        policy = %input.policy_choice,
        base_eps = scenarios.base.metrics.eps,
        base_gearing = scenarios.base.metrics.gearing,
        "policy evaluation complete"
    );

    EvaluationResult {
        metadata: ResponseMetadata {
            request_id: stamp.request_id,
            timestamp_utc: stamp.timestamp_utc,
            company_name: input.company_name.clone(),
            policy_choice: input.policy_choice,
            currency: input.currency.clone(),
        },
        base_case: scenarios.base.result(),
        option_a: scenarios.option_a.result(),
        option_b: scenarios.option_b.result(),
        stakeholders,
    }
}
