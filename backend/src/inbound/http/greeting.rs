//! Greeting endpoint used by clients to confirm the backend is reachable.
//!
//! ```text
//! GET /api/test  {"message":"Hello from the backend!"}
//! ```

use actix_web::{HttpResponse, get};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fixed greeting text.
pub const GREETING: &str = "Hello from the backend!";

/// Greeting response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Greeting {
    /// Human-readable greeting.
    #[schema(example = "Hello from the backend!")]
    pub message: String,
}

/// Return the fixed greeting.
#[utoipa::path(
    get,
    path = "/api/test",
    tags = ["greeting"],
    responses(
        (status = 200, description = "Backend is reachable", body = Greeting)
    )
)]
#[get("/api/test")]
pub async fn greet() -> HttpResponse {
    debug!("greeting requested");
    HttpResponse::Ok().json(Greeting {
        message: GREETING.to_owned(),
    })
}
