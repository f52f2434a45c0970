//! Policy registry: each [`PolicyChoice`] maps to the adjustment rules, option
//! labels and static stakeholder content that describe it.

use super::domain::{Adjustment, EvaluationInput, PolicyChoice};
use std::fmt;

/// Share of operating profit treated as development spend.
const DEVELOPMENT_COST_SHARE: f64 = 0.2;
/// Revaluation uplift as a share of book equity.
const FAIR_VALUE_UPLIFT_SHARE: f64 = 0.04;

pub type AdjustmentRule = fn(&EvaluationInput) -> Adjustment;

/// One side of a policy comparison.
#[derive(Clone, Copy)]
pub struct PolicyOption {
    pub label: &'static str,
    pub adjust: AdjustmentRule,
}

impl fmt::Debug for PolicyOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyOption")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Fixed stakeholder copy that does not depend on the computed metrics.
#[derive(Debug, Clone, Copy)]
pub struct StakeholderContent {
    pub bullets: &'static [&'static str],
    pub narrative: &'static str,
}

#[derive(Debug)]
pub struct PolicyProfile {
    pub choice: PolicyChoice,
    pub option_a: PolicyOption,
    pub option_b: PolicyOption,
    pub management: StakeholderContent,
    pub regulators: StakeholderContent,
}

impl PolicyProfile {
    pub fn for_choice(choice: PolicyChoice) -> &'static PolicyProfile {
        match choice {
            PolicyChoice::CapitaliseVsExpense => &CAPITALISE_VS_EXPENSE,
            PolicyChoice::FairValueVsCost => &FAIR_VALUE_VS_COST,
        }
    }
}

static CAPITALISE_VS_EXPENSE: PolicyProfile = PolicyProfile {
    choice: PolicyChoice::CapitaliseVsExpense,
    option_a: PolicyOption {
        label: "Capitalise",
        adjust: capitalise,
    },
    option_b: PolicyOption {
        label: "Expense",
        adjust: expense,
    },
    management: StakeholderContent {
        bullets: &[
            "Bonus metrics improve with capitalisation.",
            "Delivery pressure increases to justify the asset.",
        ],
        narrative: "Management benefits from a smoother earnings profile. \
            Execution discipline becomes the key justification for the choice.",
    },
    regulators: StakeholderContent {
        bullets: &[
            "Expect tighter documentation on development criteria.",
            "Scrutiny on impairment testing cadence.",
        ],
        narrative: "Regulators focus on evidence that capitalised projects meet recognition criteria. \
            They signal that disclosure quality will drive acceptance.",
    },
};

static FAIR_VALUE_VS_COST: PolicyProfile = PolicyProfile {
    choice: PolicyChoice::FairValueVsCost,
    option_a: PolicyOption {
        label: "Fair value",
        adjust: fair_value,
    },
    option_b: PolicyOption {
        label: "Cost",
        adjust: cost_basis,
    },
    management: StakeholderContent {
        bullets: &[
            "Valuation teams gain prominence in reporting cycles.",
            "Narrative must explain revaluation drivers.",
        ],
        narrative: "Management spends more time defending valuation inputs. \
            A clear story on value drivers becomes central to stakeholder trust.",
    },
    regulators: StakeholderContent {
        bullets: &[
            "Expect robust valuation governance processes.",
            "Cost basis may reduce disclosure burden.",
        ],
        narrative: "Regulators focus on valuation independence and model governance. \
            They look for consistency in assumptions across reporting periods.",
    },
};

fn development_cost(input: &EvaluationInput) -> f64 {
    (input.operating_profit * DEVELOPMENT_COST_SHARE).max(0.0)
}

fn after_tax(input: &EvaluationInput, amount: f64) -> f64 {
    amount * (1.0 - input.tax_rate)
}

fn capitalise(input: &EvaluationInput) -> Adjustment {
    let cost = development_cost(input);
    Adjustment {
        profit_after_tax: after_tax(input, cost),
        equity: cost,
    }
}

fn expense(input: &EvaluationInput) -> Adjustment {
    let net_cost = after_tax(input, development_cost(input));
    Adjustment {
        profit_after_tax: -net_cost,
        equity: -net_cost,
    }
}

fn fair_value_uplift(input: &EvaluationInput) -> f64 {
    (input.equity * FAIR_VALUE_UPLIFT_SHARE).max(0.0)
}

fn fair_value(input: &EvaluationInput) -> Adjustment {
    let uplift = fair_value_uplift(input);
    Adjustment {
        profit_after_tax: after_tax(input, uplift) * 0.2,
        equity: uplift * 0.5,
    }
}

fn cost_basis(input: &EvaluationInput) -> Adjustment {
    let uplift = fair_value_uplift(input);
    Adjustment {
        profit_after_tax: -after_tax(input, uplift) * 0.1,
        equity: -uplift * 0.2,
    }
}
