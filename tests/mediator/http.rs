//! Reference HTTP mapping — status codes and bodies per outcome class.
//!
//! Requires the `http` feature.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use mediator_rust::{FieldErrors, Outcome};
use serde_json::Value;
use uuid::Uuid;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn success_maps_to_200_with_the_value() {
    let id = Uuid::new_v4();
    let response = Outcome::success(id).into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!(id));
}

#[tokio::test]
async fn unit_success_maps_to_200_with_null() {
    let response = Outcome::ok().into_response();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, Value::Null);
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let response = Outcome::<Uuid>::not_found("no user u1").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["errorCode"], "NotFound");
    assert_eq!(body["errorMessage"], "no user u1");
}

#[tokio::test]
async fn validation_failure_maps_to_400_with_the_errors_map() {
    let mut errors = FieldErrors::new();
    errors.insert("name".to_string(), vec!["must not be empty".to_string()]);

    let response = Outcome::<Uuid>::bad_request(errors).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["errorCode"], "ValidationError");
    assert_eq!(body["errors"]["name"][0], "must not be empty");
}

#[tokio::test]
async fn other_codes_map_to_400_with_code_and_message() {
    let response = Outcome::<()>::failure_with_code("Conflict", "already exists").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["errorCode"], "Conflict");
    assert_eq!(body["errorMessage"], "already exists");
    assert!(body.get("errors").is_none());
}
