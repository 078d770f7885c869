mod config;
mod errors;
mod models;
mod routes;
mod storage;

use crate::config::{Config, Mode};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer, web};
use env_logger::Env;
use std::path::Path;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let mode = Mode::from_env();
    // Init logger per mode, but RUST_LOG can override
    env_logger::Builder::from_env(Env::default().default_filter_or(mode.default_log_filter()))
        .init();
    let cfg = Config::from_env(mode);

    // No upload can proceed without the directory, so this is fatal.
    storage::ensure_dir(Path::new(&cfg.uploads_dir)).inspect_err(|e| {
        log::error!("failed to create uploads dir {:?}: {e}", cfg.uploads_dir);
    })?;

    let port = cfg.port;
    log::info!("Starting server on port {port} ({mode:?})");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(cfg.clone()))
            .route("/", web::get().to(routes::listing::list_files))
            .service(
                web::scope("/api")
                    .route("/upload", web::post().to(routes::uploads::upload_single))
                    .route(
                        "/upload-multiple",
                        web::post().to(routes::uploads::upload_multiple),
                    ),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
