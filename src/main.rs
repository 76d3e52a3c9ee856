use std::io;
use std::process;

use log::{error, info};

use actix_web::web::Data;
use actix_web::{App, HttpServer, middleware};

use traefik_maintenance::config;
use traefik_maintenance::handlers;
use traefik_maintenance::maintenance::MaintenancePage;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let log_level = config::read_log_level();
    env_logger::Builder::new()
        .parse_filters(&format!(
            "{},actix_web=info,actix_server=info",
            log_level
        ))
        .init();
    info!("Starting maintenance service.");

    info!("Reading configuration.");
    let config = match config::read_config() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration. {}", err);
            process::exit(1);
        }
    };
    let page = match MaintenancePage::new(&config) {
        Ok(page) => Data::new(page),
        Err(err) => {
            error!("Invalid configuration. {}", err);
            process::exit(1);
        }
    };

    if !config.enabled {
        info!("Maintenance mode disabled. All requests are let through.");
    } else if config.trigger_filename.is_empty() {
        info!("Maintenance mode always on.");
    } else {
        info!(
            "Maintenance mode on while {} exists.",
            config.trigger_filename
        );
    }

    // API.
    info!("Starting HTTP server (API) on port {}.", config.port);
    HttpServer::new(move || {
        App::new()
            // Enable the logger - always register actix-web Logger middleware last.
            .wrap(middleware::Logger::default())
            // App data.
            .app_data(page.clone())
            // Register HTTP requests handlers.
            .service(handlers::forward_auth)
            .service(handlers::status)
            .service(handlers::health)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
