//! Server construction, middleware wiring, and board start-up.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use camino::Utf8PathBuf;
use mockable::DefaultClock;
use tracing::info;

use jobboard::Trace;
#[cfg(debug_assertions)]
use jobboard::doc::ApiDoc;
use jobboard::domain::ports::{BoardStorage, BoardStorageError};
use jobboard::domain::{CredentialDirectory, JobBoardService, SessionService};
use jobboard::inbound::http::health::HealthState;
use jobboard::inbound::http::{configure, cors};
use jobboard::outbound::storage::{FileBoardStorage, InMemoryBoardStorage};
use jobboard::settings::BoardSettings;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Select the storage adapter named by `settings`.
///
/// # Errors
/// Returns [`BoardStorageError::Io`] when the storage directory is not valid
/// UTF-8 or cannot be opened.
pub fn open_storage(settings: &BoardSettings) -> Result<Arc<dyn BoardStorage>, BoardStorageError> {
    let Some(dir) = settings.storage_dir() else {
        info!("keeping board records in memory");
        return Ok(Arc::new(InMemoryBoardStorage::new()));
    };
    let root = Utf8PathBuf::from_path_buf(dir.clone()).map_err(|path| {
        BoardStorageError::io(format!("storage directory is not UTF-8: {}", path.display()))
    })?;
    let storage = FileBoardStorage::open(&root)?;
    info!(root = %storage.root(), "keeping board records on disk");
    Ok(Arc::new(storage))
}

/// Load the session and job board services over `storage`.
///
/// Loading seeds and persists the demonstration postings when the storage
/// holds none yet.
pub fn load_board(storage: Arc<dyn BoardStorage>) -> (Arc<SessionService>, JobBoardService) {
    let clock = Arc::new(DefaultClock);
    let session = Arc::new(SessionService::restore(
        storage.clone(),
        CredentialDirectory::demo(),
        clock.clone(),
    ));
    let board = JobBoardService::load(storage, session.clone(), clock);
    info!(
        postings = board.jobs().len(),
        signed_in = session.is_authenticated(),
        "job board loaded"
    );
    (session, board)
}

fn build_app(
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .wrap(cors())
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone()))
        .bind(config.bind_addr())?
        .run();

    health_state.mark_listening();
    info!(host = %config.host, port = config.port, "server listening");
    Ok(server)
}
