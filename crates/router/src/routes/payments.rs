use actix_web::{web, HttpResponse};
use api_models::payments::AuthorizeRequest;

use super::app::AppState;
use crate::{core::payments, services};

pub async fn authorize(
    state: web::Data<AppState>,
    json_payload: web::Json<AuthorizeRequest>,
) -> HttpResponse {
    match payments::authorize(&state, json_payload.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => services::log_and_return_error_response(error),
    }
}
