#![allow(clippy::unwrap_used)]

mod utils;

use router::routes::{graphql, AppState};

#[actix_web::test]
async fn health_query_answers_ok() {
    let schema = graphql::schema(AppState::new(utils::settings(true)));
    let response = schema.execute("{ health }").await;
    assert!(response.errors.is_empty());
    assert_eq!(
        response.data.into_json().unwrap(),
        serde_json::json!({ "health": "ok" })
    );
}

#[actix_web::test]
async fn get_token_surfaces_flow_errors() {
    let schema = graphql::schema(AppState::new(utils::settings(false)));
    let response = schema
        .execute(
            r#"mutation {
                getToken(input: {
                    cardNumber: "4111111111111111",
                    cardExpire: "12/30"
                }) { token status }
            }"#,
        )
        .await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        response.errors[0].message,
        "Tokenization API key is not configured"
    );
    // The card number never appears in the GraphQL error payload.
    let rendered = serde_json::to_string(&response).unwrap();
    assert!(!rendered.contains("4111111111111111"));
}
