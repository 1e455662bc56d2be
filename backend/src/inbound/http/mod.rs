//! HTTP inbound adapter exposing the demonstration endpoints.

pub mod greeting;
pub mod health;

use actix_cors::Cors;
use actix_web::web;

/// Register the greeting and health routes.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use jobboard::inbound::http::{configure, health::HealthState};
///
/// let app = App::new()
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(greeting::greet)
        .service(health::ready)
        .service(health::live);
}

/// Cross-origin policy open to every origin, method and request header.
///
/// Cross-origin responses carry `Access-Control-Allow-Origin: *` and
/// preflight requests are answered directly, before routing.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
