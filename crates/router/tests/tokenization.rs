#![allow(clippy::unwrap_used)]

mod utils;

use actix_web::{test, App};
use router::routes::{AppState, Health, Tokens};

#[actix_web::test]
async fn missing_card_number_is_a_bad_request() {
    let state = AppState::new(utils::settings(true));
    let app = test::init_service(App::new().service(Tokens::server(state))).await;

    let request = test::TestRequest::post()
        .uri("/tokens")
        .set_json(serde_json::json!({ "card_expire": "12/30" }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Missing required field: card_number");
}

#[actix_web::test]
async fn missing_token_api_key_is_a_server_error() {
    let state = AppState::new(utils::settings(false));
    let app = test::init_service(App::new().service(Tokens::server(state))).await;

    let request = test::TestRequest::post()
        .uri("/tokens")
        .set_json(serde_json::json!({
            "card_number": "4111111111111111",
            "card_expire": "12/30",
            "security_code": "123"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status().as_u16(), 500);
    let body = test::read_body(response).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    // Card data must never leak into an error body.
    assert!(!text.contains("4111111111111111"));
    assert!(text.contains("Tokenization API key is not configured"));
}

#[actix_web::test]
async fn health_returns_plain_text() {
    let app = test::init_service(App::new().service(Health::server())).await;
    let request = test::TestRequest::get().uri("/health").to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = test::read_body(response).await;
    assert_eq!(body, "health is good");
}
