pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod helpers;

use actix_cors::Cors;
use actix_web::web;
use crate::config::CorsConfig;
use crate::error::ApiError;
use tracing::warn;

/// Register every route served by the API.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(handlers::generate::generate_project)
        .service(handlers::health::health_check)
        .service(handlers::categories::list_categories);
}

/// Bodies that cannot be decoded, including ones with a keyword but a wrongly
/// typed field, are treated like a request without a keyword.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "Rejecting undecodable request body");
        ApiError::KeywordRequired.into()
    })
}

pub fn build_cors(config: &CorsConfig) -> Cors {
    if config.allows_any_origin() {
        return Cors::permissive();
    }

    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
