use actix_web::{web, HttpResponse};
use api_models::tokenization::TokenizeRequest;

use super::app::AppState;
use crate::{core::tokenization, services};

pub async fn create_token(
    state: web::Data<AppState>,
    json_payload: web::Json<TokenizeRequest>,
) -> HttpResponse {
    match tokenization::get_token(&state, json_payload.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => services::log_and_return_error_response(error),
    }
}
