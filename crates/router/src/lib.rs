#![forbid(unsafe_code)]
#![warn(clippy::expect_used, clippy::unwrap_used)]

pub mod configs;
pub mod connector;
pub mod consts;
pub mod core;
pub mod logger;
pub mod routes;
pub mod services;
pub mod utils;

use actix_web::{middleware, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{configs::settings::Settings, routes::AppState};

/// Build and run the HTTP server until shutdown.
pub async fn start_server(conf: Settings) -> std::io::Result<()> {
    tracing::info!(host = %conf.server.host, port = conf.server.port, "starting server");
    let listen = (conf.server.host.clone(), conf.server.port);
    let state = AppState::new(conf);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(TracingLogger::default())
            .service(routes::Tokens::server(state.clone()))
            .service(routes::Payments::server(state.clone()))
            .service(routes::GraphQL::server(state.clone()))
            // The catch-all scope goes last so the prefixed scopes
            // above keep their routes.
            .service(routes::Health::server())
    })
    .bind(listen)?
    .run()
    .await
}
