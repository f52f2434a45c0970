use super::domain::{EvaluationInput, PolicyChoice};
use serde::{Deserialize, Serialize};

/// Raw evaluation request as accepted over HTTP or the CLI.
///
/// Every financial field is optional on the wire and falls back to the sample
/// company figures; only `policy_choice` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub policy_choice: String,
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_revenue")]
    pub revenue: f64,
    #[serde(default = "default_operating_profit")]
    pub operating_profit: f64,
    #[serde(default = "default_profit_after_tax")]
    pub profit_after_tax: f64,
    #[serde(default = "default_equity")]
    pub equity: f64,
    #[serde(default = "default_debt")]
    pub debt: f64,
    #[serde(default = "default_shares_outstanding")]
    pub shares_outstanding: f64,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    #[serde(default)]
    pub covenant_max_gearing: Option<f64>,
}

fn default_company_name() -> String {
    "SampleCo".to_string()
}

fn default_currency() -> String {
    "GBP".to_string()
}

fn default_revenue() -> f64 {
    1200.0
}

fn default_operating_profit() -> f64 {
    180.0
}

fn default_profit_after_tax() -> f64 {
    120.0
}

fn default_equity() -> f64 {
    800.0
}

fn default_debt() -> f64 {
    300.0
}

fn default_shares_outstanding() -> f64 {
    100.0
}

fn default_tax_rate() -> f64 {
    0.25
}

impl EvaluationRequest {
    /// A request for `policy_choice` with every other field at its default.
    pub fn for_policy(policy_choice: impl Into<String>) -> Self {
        Self {
            policy_choice: policy_choice.into(),
            company_name: default_company_name(),
            currency: default_currency(),
            revenue: default_revenue(),
            operating_profit: default_operating_profit(),
            profit_after_tax: default_profit_after_tax(),
            equity: default_equity(),
            debt: default_debt(),
            shares_outstanding: default_shares_outstanding(),
            tax_rate: default_tax_rate(),
            covenant_max_gearing: None,
        }
    }

    /// Validate the request into a core input.
    ///
    /// Unknown policies and non-finite figures are rejected here so the core
    /// never sees them. `tax_rate` is not range-checked.
    pub fn into_input(self) -> Result<EvaluationInput, InputError> {
        let policy_choice: PolicyChoice = self.policy_choice.parse()?;

        let figures = [
            ("revenue", self.revenue),
            ("operating_profit", self.operating_profit),
            ("profit_after_tax", self.profit_after_tax),
            ("equity", self.equity),
            ("debt", self.debt),
            ("shares_outstanding", self.shares_outstanding),
            ("tax_rate", self.tax_rate),
        ];
        if let Some((field, _)) = figures.iter().find(|(_, value)| !value.is_finite()) {
            return Err(InputError::NonFinite { field: *field });
        }
        if self.covenant_max_gearing.is_some_and(|limit| !limit.is_finite()) {
            return Err(InputError::NonFinite {
                field: "covenant_max_gearing",
            });
        }

        Ok(EvaluationInput {
            policy_choice,
            company_name: self.company_name,
            currency: self.currency,
            revenue: self.revenue,
            operating_profit: self.operating_profit,
            profit_after_tax: self.profit_after_tax,
            equity: self.equity,
            debt: self.debt,
            shares_outstanding: self.shares_outstanding,
            tax_rate: self.tax_rate,
            covenant_max_gearing: self.covenant_max_gearing,
        })
    }
}

/// Client-side problems with an evaluation request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown policy_choice '{0}' (expected DEV_CAPITALISE_VS_EXPENSE or IP_FAIR_VALUE_VS_COST)")]
    UnknownPolicy(String),
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("malformed request body: {0}")]
    Malformed(String),
}
