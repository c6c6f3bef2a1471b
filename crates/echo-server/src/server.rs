use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use echo_core::{ChatResponder, EchoResponder};
use std::io;
use std::sync::Arc;

use crate::handlers;
use crate::state::AppState;

/// Run the server with the built-in echo responder.
pub async fn run_server(host: &str, port: u16) -> io::Result<()> {
    run_server_with_responder(host, port, Arc::new(EchoResponder)).await
}

/// Run the server with an injected responder.
pub async fn run_server_with_responder(
    host: &str,
    port: u16,
    responder: Arc<dyn ChatResponder>,
) -> io::Result<()> {
    let state = web::Data::new(AppState::new(responder));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .configure(api_config)
    })
    .bind(format!("{}:{}", host, port))?;

    log::info!("Listening on http://{}:{}", host, port);
    server.run().await
}

pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/chat", web::post().to(handlers::chat::handler))
            .route("/health", web::get().to(handlers::health::handler)),
    );
}
