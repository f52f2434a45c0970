use clap::Args;
use policy_impact::error::AppError;
use policy_impact::evaluation::{
    evaluate, EvaluationRequest, EvaluationResult, ScenarioResult, StakeholderRole,
};
use std::fmt::Write;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Policy code (DEV_CAPITALISE_VS_EXPENSE or IP_FAIR_VALUE_VS_COST)
    #[arg(long)]
    pub(crate) policy: String,
    /// Company name shown in the report (defaults to SampleCo)
    #[arg(long)]
    pub(crate) company_name: Option<String>,
    /// Reporting currency label (defaults to GBP)
    #[arg(long)]
    pub(crate) currency: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) revenue: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) operating_profit: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) profit_after_tax: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) equity: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) debt: Option<f64>,
    #[arg(long)]
    pub(crate) shares_outstanding: Option<f64>,
    /// Effective tax rate as a fraction (0.25 = 25%)
    #[arg(long)]
    pub(crate) tax_rate: Option<f64>,
    /// Maximum gearing (%) allowed by lender covenants
    #[arg(long)]
    pub(crate) covenant_max_gearing: Option<f64>,
    /// Print the JSON response instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

impl EvaluateArgs {
    pub(crate) fn into_request(self) -> EvaluationRequest {
        let defaults = EvaluationRequest::for_policy(self.policy);
        EvaluationRequest {
            company_name: self.company_name.unwrap_or(defaults.company_name),
            currency: self.currency.unwrap_or(defaults.currency),
            revenue: self.revenue.unwrap_or(defaults.revenue),
            operating_profit: self.operating_profit.unwrap_or(defaults.operating_profit),
            profit_after_tax: self.profit_after_tax.unwrap_or(defaults.profit_after_tax),
            equity: self.equity.unwrap_or(defaults.equity),
            debt: self.debt.unwrap_or(defaults.debt),
            shares_outstanding: self
                .shares_outstanding
                .unwrap_or(defaults.shares_outstanding),
            tax_rate: self.tax_rate.unwrap_or(defaults.tax_rate),
            covenant_max_gearing: self.covenant_max_gearing,
            policy_choice: defaults.policy_choice,
        }
    }
}

pub(crate) fn run_evaluation(args: EvaluateArgs) -> Result<(), AppError> {
    let as_json = args.json;
    let input = args.into_request().into_input()?;
    let result = evaluate(&input);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_report(&result));
    }
    Ok(())
}

pub(crate) fn format_report(result: &EvaluationResult) -> String {
    let metadata = &result.metadata;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} | {} ({})",
        metadata.company_name,
        metadata.policy_choice.label(),
        metadata.currency
    );
    let _ = writeln!(
        out,
        "Request {} at {}",
        metadata.request_id,
        metadata.timestamp_utc.to_rfc3339()
    );

    out.push_str("\nScenarios\n");
    let _ = writeln!(
        out,
        "  {:<10} {:>8} {:>10} {:>8} {:>10}",
        "", "EPS", "Gearing %", "Bonus", "Prudence"
    );
    for scenario in [&result.base_case, &result.option_a, &result.option_b] {
        write_scenario(&mut out, scenario);
    }

    for role in StakeholderRole::ordered() {
        let impact = result.stakeholders.get(role);
        let _ = writeln!(out, "\n{}", impact.title);
        for bullet in &impact.bullet_impacts {
            let _ = writeln!(out, "  - {bullet}");
        }
        let _ = writeln!(out, "  {}", impact.narrative);
    }

    out
}

fn write_scenario(out: &mut String, scenario: &ScenarioResult) {
    let metrics = &scenario.headline_metrics;
    let _ = writeln!(
        out,
        "  {:<10} {:>8.2} {:>10.1} {:>8.2} {:>10.2}",
        scenario.label, metrics.eps, metrics.gearing, metrics.bonus_estimate, metrics.prudence_score
    );
}
