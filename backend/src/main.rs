mod assets;
mod config;
mod services;

use crate::config::ServerConfig;
use crate::services::reports::upstream::Upstream;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::parse();
    let url = config.public_url();

    let upstream = Upstream::new(config.upstream.clone(), config.upstream_timeout())
        .map_err(io::Error::other)?;
    match upstream.base_url() {
        Some(base) => info!("Forwarding report API to {}", base),
        None => warn!("No upstream configured (--upstream / REPORT_UPSTREAM_URL); API routes will answer 503"),
    }

    if !config.no_browser {
        let browser_url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&browser_url);
        });
    }

    info!("Server running at {}", url);

    let upstream = web::Data::new(upstream);
    HttpServer::new(move || {
        App::new()
            .app_data(services::reports::json_config())
            .app_data(upstream.clone())
            .service(services::reports::configure_routes())
            .default_service(web::route().to(assets::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
