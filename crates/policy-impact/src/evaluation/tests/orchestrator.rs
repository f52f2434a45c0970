use super::common::*;
use crate::evaluation::{evaluate, evaluate_with, PolicyChoice};
use serde_json::Value;

#[test]
fn evaluation_is_deterministic_apart_from_identity() {
    let input = with_covenant(PolicyChoice::CapitaliseVsExpense, 30.0);

    let first = evaluate(&input);
    let second = evaluate(&input);

    assert_ne!(first.metadata.request_id, second.metadata.request_id);
    assert_eq!(first.base_case, second.base_case);
    assert_eq!(first.option_a, second.option_a);
    assert_eq!(first.option_b, second.option_b);
    assert_eq!(first.stakeholders, second.stakeholders);
}

#[test]
fn fixed_stamp_reproduces_the_whole_result() {
    let input = sample_input(PolicyChoice::FairValueVsCost);
    assert_eq!(
        evaluate_with(&input, fixed_stamp()),
        evaluate_with(&input, fixed_stamp())
    );
}

#[test]
fn metadata_echoes_input_identity() {
    let mut input = sample_input(PolicyChoice::FairValueVsCost);
    input.company_name = "Acme Robotics".to_string();
    input.currency = "EUR".to_string();

    let result = evaluate_with(&input, fixed_stamp());

    assert_eq!(result.metadata.company_name, "Acme Robotics");
    assert_eq!(result.metadata.currency, "EUR");
    assert_eq!(result.metadata.policy_choice, PolicyChoice::FairValueVsCost);
    assert_eq!(result.metadata.request_id, fixed_stamp().request_id);
    assert_eq!(result.base_case.label, "Base case");
    assert_eq!(result.option_a.label, "Option A");
    assert_eq!(result.option_b.label, "Option B");
}

#[test]
fn input_is_left_untouched() {
    let input = with_covenant(PolicyChoice::CapitaliseVsExpense, 25.0);
    let snapshot = input.clone();
    let _ = evaluate(&input);
    assert_eq!(input, snapshot);
}

#[test]
fn serialized_result_matches_response_shape() {
    let input = sample_input(PolicyChoice::CapitaliseVsExpense);
    let result = evaluate_with(&input, fixed_stamp());
    let json = serde_json::to_value(&result).expect("result serializes");

    assert_eq!(
        json["metadata"]["policy_choice"],
        Value::from("DEV_CAPITALISE_VS_EXPENSE")
    );
    assert_eq!(
        json["metadata"]["request_id"],
        Value::from("00000000-0000-0000-0000-000000000000")
    );
    assert!(json["metadata"]["timestamp_utc"]
        .as_str()
        .expect("timestamp string")
        .starts_with("2025-03-31T12:00:00"));

    let headline = json["base_case"]["headline_metrics"]
        .as_object()
        .expect("metrics object");
    let mut keys: Vec<&str> = headline.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["bonus_estimate", "eps", "gearing", "prudence_score"]);

    for role in ["investors", "lenders", "management", "regulators"] {
        let impact = &json["stakeholders"][role];
        assert!(impact["title"].is_string());
        assert!(impact["bullet_impacts"].is_array());
        assert!(impact["narrative"].is_string());
    }
}
