use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::request::InputError;

/// The accounting decision being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PolicyChoice {
    /// Capitalise vs. expense development costs.
    #[serde(rename = "DEV_CAPITALISE_VS_EXPENSE")]
    CapitaliseVsExpense,
    /// Fair value vs. cost basis for intangible assets.
    #[serde(rename = "IP_FAIR_VALUE_VS_COST")]
    FairValueVsCost,
}

impl PolicyChoice {
    pub const fn ordered() -> [Self; 2] {
        [Self::CapitaliseVsExpense, Self::FairValueVsCost]
    }

    /// Wire code echoed in response metadata.
    pub const fn code(self) -> &'static str {
        match self {
            Self::CapitaliseVsExpense => "DEV_CAPITALISE_VS_EXPENSE",
            Self::FairValueVsCost => "IP_FAIR_VALUE_VS_COST",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CapitaliseVsExpense => "Development costs: capitalise vs. expense",
            Self::FairValueVsCost => "Intangible assets: fair value vs. cost",
        }
    }
}

impl fmt::Display for PolicyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PolicyChoice {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "DEV_CAPITALISE_VS_EXPENSE" | "CAPITALISE_VS_EXPENSE" => Ok(Self::CapitaliseVsExpense),
            "IP_FAIR_VALUE_VS_COST" | "FAIR_VALUE_VS_COST" => Ok(Self::FairValueVsCost),
            _ => Err(InputError::UnknownPolicy(raw.to_string())),
        }
    }
}

/// Validated company financials and the policy under review.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationInput {
    pub policy_choice: PolicyChoice,
    pub company_name: String,
    pub currency: String,
    pub revenue: f64,
    pub operating_profit: f64,
    pub profit_after_tax: f64,
    pub equity: f64,
    pub debt: f64,
    pub shares_outstanding: f64,
    pub tax_rate: f64,
    pub covenant_max_gearing: Option<f64>,
}

impl EvaluationInput {
    /// The unadjusted position used for the base case.
    pub fn position(&self) -> FinancialPosition {
        FinancialPosition {
            profit_after_tax: self.profit_after_tax,
            debt: self.debt,
            equity: self.equity,
            shares_outstanding: self.shares_outstanding,
        }
    }
}

/// The balance-sheet and earnings figures the ratios are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialPosition {
    pub profit_after_tax: f64,
    pub debt: f64,
    pub equity: f64,
    pub shares_outstanding: f64,
}

impl FinancialPosition {
    /// Debt and share count pass through unchanged.
    pub fn adjusted(self, adjustment: Adjustment) -> Self {
        Self {
            profit_after_tax: self.profit_after_tax + adjustment.profit_after_tax,
            equity: self.equity + adjustment.equity,
            ..self
        }
    }
}

/// Signed deltas a policy option applies to a position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Adjustment {
    pub profit_after_tax: f64,
    pub equity: f64,
}

/// The four audiences receiving an impact summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StakeholderRole {
    Investors,
    Lenders,
    Management,
    Regulators,
}

impl StakeholderRole {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Investors,
            Self::Lenders,
            Self::Management,
            Self::Regulators,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Investors => "Investors",
            Self::Lenders => "Lenders",
            Self::Management => "Management",
            Self::Regulators => "Regulators",
        }
    }
}
