//! CORS middleware configuration for cross-origin requests.
//!
//! Built from `CorsConfig`: permissive in development, an explicit origin
//! list (`ALLOWED_ORIGINS`) in production.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use radar_shared::config::CorsConfig;

use crate::handlers::REQUEST_ID_HEADER;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = if config.allows_any_origin() {
        tracing::info!("Configuring permissive CORS");
        Cors::default().allow_any_origin().allow_any_header()
    } else {
        tracing::info!(origins = ?config.allowed_origins, "Configuring restricted CORS");
        let mut cors = Cors::default();
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
        let headers: Vec<header::HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|name| header::HeaderName::try_from(name.as_str()).ok())
            .collect();
        cors.allowed_headers(headers)
    };

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|method| Method::from_bytes(method.as_bytes()).ok())
        .collect();

    cors = cors
        .allowed_methods(methods)
        .expose_headers(vec![header::HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(config.max_age);

    cors
}
