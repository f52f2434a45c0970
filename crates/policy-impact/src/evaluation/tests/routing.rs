use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::evaluation::evaluation_router;

fn post_evaluate(payload: Value) -> Request<Body> {
    Request::post("/api/v1/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn evaluate_endpoint_returns_three_scenarios() {
    let response = evaluation_router()
        .oneshot(post_evaluate(json!({
            "policy_choice": "DEV_CAPITALISE_VS_EXPENSE",
            "company_name": "Northwind",
            "covenant_max_gearing": 20.0
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    assert_eq!(body["metadata"]["company_name"], "Northwind");
    assert_eq!(body["metadata"]["currency"], "GBP");
    assert_eq!(body["base_case"]["headline_metrics"]["eps"], 1.2);
    assert_eq!(body["base_case"]["headline_metrics"]["gearing"], 37.5);
    assert_eq!(body["option_a"]["label"], "Option A");

    let lender_bullets = body["stakeholders"]["lenders"]["bullet_impacts"]
        .as_array()
        .expect("bullets array");
    assert_eq!(lender_bullets.len(), 3);
    assert!(lender_bullets[2]
        .as_str()
        .expect("bullet text")
        .contains("exceeds limit"));
}

#[tokio::test]
async fn evaluate_endpoint_rejects_unknown_policy() {
    let response = evaluation_router()
        .oneshot(post_evaluate(json!({ "policy_choice": "LIFO_VS_FIFO" })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("LIFO_VS_FIFO"));
}

#[tokio::test]
async fn evaluate_endpoint_requires_policy_choice() {
    let response = evaluation_router()
        .oneshot(post_evaluate(json!({ "company_name": "Northwind" })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.starts_with("invalid evaluation request: malformed request body"));
    assert!(message.contains("policy_choice"), "{message}");
}

#[tokio::test]
async fn evaluate_endpoint_rejects_mistyped_figures_as_json() {
    let response = evaluation_router()
        .oneshot(post_evaluate(json!({
            "policy_choice": "DEV_CAPITALISE_VS_EXPENSE",
            "equity": "abc"
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("malformed request body"), "{message}");
}

#[tokio::test]
async fn evaluate_endpoint_rejects_non_json_bodies() {
    let response = evaluation_router()
        .oneshot(
            Request::post("/api/v1/evaluate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].is_string());
}
