use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod models;
mod notes;

use config::Config;
use notes::NoteStore;

pub struct AppState {
    /// The one note collection for this process, shared by every worker
    pub notes: Arc<NoteStore>,
    pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!("Notes backend v{}", controllers::health::VERSION);
    log::info!(
        "Environment: {}, body limit: {} bytes",
        config.environment.as_ref(),
        config.body_limit_bytes
    );

    let note_store = Arc::new(NoteStore::new());

    let bind_host = config.host.clone();
    let port = config.port;
    log::info!("Listening on http://{}:{}", bind_host, port);

    let app_store = Arc::clone(&note_store);
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(config.cors_max_age_secs);

        App::new()
            .app_data(web::Data::new(AppState {
                notes: Arc::clone(&app_store),
                config: config.clone(),
            }))
            .app_data(web::PayloadConfig::new(config.body_limit_bytes))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
            .default_service(web::to(controllers::errors::route_not_found))
    })
    .bind((bind_host.as_str(), port))?
    .run();

    let server_handle = server.handle();
    let shutdown_store = Arc::clone(&note_store);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            log::warn!("Failed to listen for Ctrl+C");
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        // In-memory only: whatever is left is gone after exit
        log::info!("Discarding {} in-memory notes", shutdown_store.count());
        shutdown_store.clear();

        log::info!("Shutdown complete");
    });

    server.await
}
