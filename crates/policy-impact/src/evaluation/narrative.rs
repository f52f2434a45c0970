use super::domain::{PolicyChoice, StakeholderRole};
use super::metrics::MetricSet;
use super::policy::{PolicyProfile, StakeholderContent};
use serde::Serialize;

/// Tailored summary for one stakeholder group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StakeholderImpact {
    pub title: String,
    pub bullet_impacts: Vec<String>,
    pub narrative: String,
}

impl StakeholderImpact {
    fn from_content(role: StakeholderRole, content: &StakeholderContent) -> Self {
        Self {
            title: role.label().to_string(),
            bullet_impacts: content.bullets.iter().map(|bullet| bullet.to_string()).collect(),
            narrative: content.narrative.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StakeholderImpacts {
    pub investors: StakeholderImpact,
    pub lenders: StakeholderImpact,
    pub management: StakeholderImpact,
    pub regulators: StakeholderImpact,
}

impl StakeholderImpacts {
    pub fn get(&self, role: StakeholderRole) -> &StakeholderImpact {
        match role {
            StakeholderRole::Investors => &self.investors,
            StakeholderRole::Lenders => &self.lenders,
            StakeholderRole::Management => &self.management,
            StakeholderRole::Regulators => &self.regulators,
        }
    }
}

/// Sign of a metric change relative to the base case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn of(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Up
        } else if delta < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Flat => "flat",
        }
    }
}

/// Outcome of testing the worst scenario gearing against a lender limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CovenantStatus {
    Breach { worst: f64, limit: f64 },
    Headroom { worst: f64, limit: f64 },
}

impl CovenantStatus {
    pub fn assess(limit: f64, gearings: [f64; 3]) -> Self {
        let worst = gearings.into_iter().fold(f64::NEG_INFINITY, f64::max);
        if worst > limit {
            Self::Breach { worst, limit }
        } else {
            Self::Headroom { worst, limit }
        }
    }

    fn bullet(self) -> String {
        match self {
            Self::Breach { worst, limit } => format!(
                "Covenant: worst-case gearing {worst:.1}% exceeds limit of {limit:.1}%"
            ),
            Self::Headroom { worst, limit } => format!(
                "Covenant: worst-case gearing {worst:.1}% remains within limit of {limit:.1}%"
            ),
        }
    }

    fn clause(self) -> String {
        match self {
            Self::Breach { worst, limit } => format!(
                "Worst-case gearing of {worst:.1}% exceeds limit of {limit:.1}% set by the covenant; expect waiver or reset discussions."
            ),
            Self::Headroom { worst, limit } => format!(
                "Worst-case gearing of {worst:.1}% remains within limit of {limit:.1}% set by the covenant."
            ),
        }
    }
}

/// Produce the four stakeholder summaries for a set of scenario metrics.
pub fn narrate(
    policy_choice: PolicyChoice,
    base: &MetricSet,
    option_a: &MetricSet,
    option_b: &MetricSet,
    covenant_max_gearing: Option<f64>,
) -> StakeholderImpacts {
    let profile = PolicyProfile::for_choice(policy_choice);

    StakeholderImpacts {
        investors: investor_impact(profile, base, option_a, option_b),
        lenders: lender_impact(profile, base, option_a, option_b, covenant_max_gearing),
        management: StakeholderImpact::from_content(
            StakeholderRole::Management,
            &profile.management,
        ),
        regulators: StakeholderImpact::from_content(
            StakeholderRole::Regulators,
            &profile.regulators,
        ),
    }
}

fn movement(label: &str, metric: &str, delta: f64, precision: usize, unit: &str) -> String {
    format!(
        "{label}: {metric} {} by {:.precision$}{unit} vs base case",
        Direction::of(delta).label(),
        delta.abs(),
    )
}

fn investor_impact(
    profile: &PolicyProfile,
    base: &MetricSet,
    option_a: &MetricSet,
    option_b: &MetricSet,
) -> StakeholderImpact {
    let label_a = profile.option_a.label;
    let label_b = profile.option_b.label;

    let bullet_impacts = vec![
        movement(label_a, "EPS", option_a.eps - base.eps, 2, ""),
        movement(label_b, "EPS", option_b.eps - base.eps, 2, ""),
    ];

    let narrative = format!(
        "Base EPS of {:.2} compares with {:.2} under {label_a} and {:.2} under {label_b}. \
         Investors will look through the headline to judge the quality and persistence of earnings.",
        base.eps, option_a.eps, option_b.eps,
    );

    StakeholderImpact {
        title: StakeholderRole::Investors.label().to_string(),
        bullet_impacts,
        narrative,
    }
}

fn lender_impact(
    profile: &PolicyProfile,
    base: &MetricSet,
    option_a: &MetricSet,
    option_b: &MetricSet,
    covenant_max_gearing: Option<f64>,
) -> StakeholderImpact {
    let label_a = profile.option_a.label;
    let label_b = profile.option_b.label;

    let mut bullet_impacts = vec![
        movement(label_a, "gearing", option_a.gearing - base.gearing, 1, "pp"),
        movement(label_b, "gearing", option_b.gearing - base.gearing, 1, "pp"),
    ];

    let mut narrative = format!(
        "Base gearing of {:.1}% compares with {:.1}% under {label_a} and {:.1}% under {label_b}. \
         Lenders track how each treatment shifts leverage on the balance sheet.",
        base.gearing, option_a.gearing, option_b.gearing,
    );

    if let Some(limit) = covenant_max_gearing {
        let status =
            CovenantStatus::assess(limit, [base.gearing, option_a.gearing, option_b.gearing]);
        bullet_impacts.push(status.bullet());
        narrative.push(' ');
        narrative.push_str(&status.clause());
    }

    StakeholderImpact {
        title: StakeholderRole::Lenders.label().to_string(),
        bullet_impacts,
        narrative,
    }
}
