//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the demonstration HTTP server. It registers the greeting
//! and health probe paths and the [`Greeting`] and [`Readiness`] response
//! schemas.
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::greeting::Greeting;
use crate::inbound::http::health::Readiness;
use utoipa::OpenApi;

/// OpenAPI document for the demonstration HTTP server.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job board backend API",
        description = "Greeting and health probes served beside the job board core."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::greeting::greet,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Greeting, Readiness)),
    tags(
        (name = "greeting", description = "Reachability check for clients"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
