use actix_web::{web, Scope};

use super::{graphql, health, payments, tokenization};
use crate::configs::settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub conf: Settings,
}

impl AppState {
    pub fn new(conf: Settings) -> Self {
        Self { conf }
    }
}

pub struct Health;

impl Health {
    pub fn server() -> Scope {
        web::scope("").service(web::resource("/health").route(web::get().to(health::health)))
    }
}

pub struct Tokens;

impl Tokens {
    pub fn server(state: AppState) -> Scope {
        web::scope("/tokens")
            .app_data(web::Data::new(state))
            .service(web::resource("").route(web::post().to(tokenization::create_token)))
    }
}

pub struct Payments;

impl Payments {
    pub fn server(state: AppState) -> Scope {
        web::scope("/payments")
            .app_data(web::Data::new(state))
            .service(web::resource("/authorize").route(web::post().to(payments::authorize)))
    }
}

pub struct GraphQL;

impl GraphQL {
    pub fn server(state: AppState) -> Scope {
        web::scope("/graphql")
            .app_data(web::Data::new(graphql::schema(state)))
            .service(web::resource("").route(web::post().to(graphql::graphql_handler)))
    }
}
