//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod extract;
mod handlers;
mod middleware;
mod seed;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!("Starting Blog API Server on {}:{}", config.host, config.port);

    let state = AppState::new();

    if config.seed_sample_data {
        match seed::load_sample_data(&state).await {
            Ok(()) => tracing::info!("Sample data loaded"),
            Err(e) => tracing::error!(error = %e, "Failed to load sample data"),
        }
    }

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::cors::api_cors())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
            .default_service(web::route().to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
