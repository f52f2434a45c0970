use super::domain::FinancialPosition;
use serde::Serialize;

const BONUS_FLOOR: f64 = 0.5;
const BONUS_CAP: f64 = 2.5;
const PRUDENCE_FLOOR: f64 = 1.0;
const PRUDENCE_CAP: f64 = 10.0;

/// Headline ratios for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSet {
    pub eps: f64,
    pub gearing: f64,
    pub bonus_estimate: f64,
    pub prudence_score: f64,
}

/// Derive the headline ratios. Degenerate denominators yield zero instead of failing.
pub fn compute_metrics(position: &FinancialPosition) -> MetricSet {
    let eps = if position.shares_outstanding == 0.0 {
        0.0
    } else {
        position.profit_after_tax / position.shares_outstanding
    };

    let gearing = if position.equity > 0.0 {
        (position.debt / position.equity) * 100.0
    } else {
        0.0
    };

    MetricSet {
        eps,
        gearing,
        bonus_estimate: bonus_estimate(eps),
        prudence_score: prudence_score(gearing),
    }
}

/// Incentive-pay proxy, rising with EPS.
pub fn bonus_estimate(eps: f64) -> f64 {
    (0.6 + eps * 0.5).clamp(BONUS_FLOOR, BONUS_CAP)
}

/// Conservatism proxy, falling as leverage rises.
pub fn prudence_score(gearing: f64) -> f64 {
    (9.0 - gearing / 15.0).clamp(PRUDENCE_FLOOR, PRUDENCE_CAP)
}
