use super::domain::{EvaluationInput, FinancialPosition};
use super::metrics::{compute_metrics, MetricSet};
use super::policy::{PolicyOption, PolicyProfile};
use serde::Serialize;

pub const BASE_CASE_LABEL: &str = "Base case";
pub const OPTION_A_LABEL: &str = "Option A";
pub const OPTION_B_LABEL: &str = "Option B";

/// A labelled position and the ratios derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub label: &'static str,
    pub position: FinancialPosition,
    pub metrics: MetricSet,
}

impl Scenario {
    fn new(label: &'static str, position: FinancialPosition) -> Self {
        Self {
            label,
            position,
            metrics: compute_metrics(&position),
        }
    }

    fn from_option(label: &'static str, input: &EvaluationInput, option: &PolicyOption) -> Self {
        let adjustment = (option.adjust)(input);
        Self::new(label, input.position().adjusted(adjustment))
    }

    pub fn result(&self) -> ScenarioResult {
        ScenarioResult {
            label: self.label.to_string(),
            headline_metrics: self.metrics,
        }
    }
}

/// Serialized shape of a scenario in the evaluation response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub label: String,
    pub headline_metrics: MetricSet,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioSet {
    pub base: Scenario,
    pub option_a: Scenario,
    pub option_b: Scenario,
}

/// Run the base position and both policy options through the metric calculator.
pub fn build_scenarios(input: &EvaluationInput) -> ScenarioSet {
    let profile = PolicyProfile::for_choice(input.policy_choice);

    ScenarioSet {
        base: Scenario::new(BASE_CASE_LABEL, input.position()),
        option_a: Scenario::from_option(OPTION_A_LABEL, input, &profile.option_a),
        option_b: Scenario::from_option(OPTION_B_LABEL, input, &profile.option_b),
    }
}
