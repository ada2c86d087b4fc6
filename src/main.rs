use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;

use marketplace_relay::{
    api::routes,
    config::ServerConfig,
    logging::setup_logging,
    models::AppState,
    services::MarketplaceService,
    utils::{Authorizer, TokenAuthorizer},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    setup_logging();

    let config = ServerConfig::from_env();

    let marketplace = MarketplaceService::new()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let app_state = AppState {
        marketplace: Arc::new(marketplace),
        marketplace_app_url: config.marketplace_app_url.clone(),
    };
    let authorizer: Arc<dyn Authorizer> = Arc::new(TokenAuthorizer::new(config.api_key.clone()));

    info!("Starting server on {}:{}", config.host, config.port);
    let server = HttpServer::new(move || {
        let authorizer = Arc::clone(&authorizer);
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .app_data(web::ThinData(app_state.clone()))
            .configure(move |cfg| routes::configure_routes(cfg, authorizer))
    })
    .bind((config.host.as_str(), config.port))?
    .shutdown_timeout(5);

    info!("Server running at http://{}:{}", config.host, config.port);

    server.run().await
}
