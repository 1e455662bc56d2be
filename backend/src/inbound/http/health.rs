//! Health probes for the job board server.
//!
//! Readiness waits for two start-up milestones: the board has been loaded
//! from storage (which seeds the demonstration postings on first start) and
//! the HTTP listener is bound. The readiness body reports both milestones and
//! the posting count seen at load. Liveness answers while the process serves
//! requests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Start-up milestones shared between `main` and the readiness probe.
#[derive(Debug, Default)]
pub struct HealthState {
    board_loaded: AtomicBool,
    listening: AtomicBool,
    postings: AtomicUsize,
}

impl HealthState {
    /// Create a state with no milestone reached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the board finished loading holding `postings` postings.
    pub fn record_board_loaded(&self, postings: usize) {
        self.postings.store(postings, Ordering::Relaxed);
        self.board_loaded.store(true, Ordering::Release);
    }

    /// Record that the HTTP listener is bound.
    pub fn mark_listening(&self) {
        self.listening.store(true, Ordering::Release);
    }

    /// Snapshot the milestones for the readiness probe.
    pub fn readiness(&self) -> Readiness {
        let board_loaded = self.board_loaded.load(Ordering::Acquire);
        Readiness {
            board_loaded,
            listening: self.listening.load(Ordering::Acquire),
            postings: if board_loaded {
                self.postings.load(Ordering::Relaxed)
            } else {
                0
            },
        }
    }
}

/// Readiness probe body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Readiness {
    /// Whether the board has been loaded from storage.
    pub board_loaded: bool,
    /// Whether the HTTP listener is bound.
    pub listening: bool,
    /// Postings held when the board finished loading.
    pub postings: usize,
}

impl Readiness {
    /// True once every start-up milestone is reached.
    pub fn is_ready(self) -> bool {
        self.board_loaded && self.listening
    }
}

/// Readiness probe. 200 once the board is loaded and the listener bound,
/// 503 before; the body reports each milestone.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Board loaded and listener bound", body = Readiness),
        (status = 503, description = "Start-up still in progress", body = Readiness)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let readiness = state.readiness();
    let mut response = if readiness.is_ready() {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(readiness)
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses((status = 200, description = "Process is serving requests"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}
