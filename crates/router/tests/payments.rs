#![allow(clippy::unwrap_used)]

mod utils;

use actix_web::{test, App};
use router::routes::{AppState, Payments};

async fn post_authorize(
    state: AppState,
    payload: serde_json::Value,
) -> (u16, serde_json::Value) {
    let app = test::init_service(App::new().service(Payments::server(state))).await;
    let request = test::TestRequest::post()
        .uri("/payments/authorize")
        .set_json(payload)
        .to_request();
    let response = test::call_service(&app, request).await;
    let status = response.status().as_u16();
    let body = test::read_body_json(response).await;
    (status, body)
}

#[actix_web::test]
async fn missing_token_is_a_bad_request() {
    let state = AppState::new(utils::settings(true));
    let (status, body) = post_authorize(state, serde_json::json!({ "amount": 1000 })).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Missing required field: token");
}

#[actix_web::test]
async fn missing_amount_is_a_bad_request() {
    let state = AppState::new(utils::settings(true));
    let (status, body) =
        post_authorize(state, serde_json::json!({ "token": "tok_411111" })).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Missing required field: amount");
}

#[actix_web::test]
async fn missing_merchant_credentials_is_a_server_error() {
    let state = AppState::new(utils::settings(false));
    let (status, body) = post_authorize(
        state,
        serde_json::json!({ "token": "tok_411111", "amount": 1000 }),
    )
    .await;
    assert_eq!(status, 500);
    assert_eq!(body["message"], "Merchant credentials are not configured");
}

#[actix_web::test]
async fn validation_runs_before_the_credential_check() {
    // Both the payload and the deployment are broken; the caller's
    // mistake wins.
    let state = AppState::new(utils::settings(false));
    let (status, body) = post_authorize(state, serde_json::json!({})).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Missing required field: token");
}
