//! Job board backend library.
//!
//! The [`domain`] module holds the session and job board services and the
//! storage port they persist through. [`outbound`] provides the in-memory and
//! file-backed storage adapters. [`inbound`] exposes the demonstration HTTP
//! endpoints, which stand beside the core and do not consult it.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware.
pub use middleware::Trace;
