//! Backend entry-point: loads settings, starts the job board, and serves the
//! demonstration HTTP endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

use jobboard::inbound::http::health::HealthState;
use jobboard::settings::BoardSettings;
use server::{ServerConfig, create_server, load_board, open_storage};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = BoardSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let storage = open_storage(&settings).map_err(std::io::Error::other)?;
    let health_state = web::Data::new(HealthState::new());

    // The demonstration routes never read the board; loading it seeds storage
    // and gates readiness.
    let (session, board) = load_board(storage);
    health_state.record_board_loaded(board.jobs().len());
    debug!(
        signed_in = session.is_authenticated(),
        "board services are not mounted on the HTTP server"
    );

    let server = create_server(health_state, &ServerConfig::from_settings(&settings))?;
    server.await
}
