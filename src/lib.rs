//! PM Portfolio - library for app logic and testing

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod routes;
pub mod state;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    services::ServeDir, trace::TraceLayer,
};

use catalog::Catalog;
use config::ServerConfig;
use error::StartupError;
use state::AppState;

/// Request bodies above this size are rejected with 413.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Configure CORS from `ALLOWED_ORIGINS`, falling back to the local dev origins.
pub fn configure_cors(config: &ServerConfig) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        origins = [
            format!("http://localhost:{}", config.port),
            format!("http://127.0.0.1:{}", config.port),
        ]
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// Create and configure the application router.
pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    let cors = configure_cors(config);

    Router::new()
        .route("/", get(routes::home::home))
        .route("/api/projects", get(routes::projects::list_projects))
        .route("/api/projects/{id}", get(routes::projects::get_project))
        .route("/api/skills", get(routes::skills::list_skills))
        .route("/api/contact", post(routes::contact::submit_contact))
        .route("/health", get(routes::health::health_ping))
        .route("/health/ready", get(routes::health::health_ready))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(routes::not_found)
        .with_state(state)
        .layer(logging::middleware::propagate_request_id_layer())
        .layer(middleware::from_fn(logging::middleware::log_request))
        .layer(logging::middleware::request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors)
}

/// Run the server (used by main).
pub async fn run() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();

    // Guards must outlive the server or buffered log lines are lost.
    let _log_guards = logging::init(&config)?;

    routes::health::init_start_time();

    let catalog = Catalog::reference().inspect_err(|e| {
        tracing::error!(error = %e, "failed to build catalog");
    })?;
    tracing::info!(
        projects = catalog.list_projects().len(),
        skill_categories = catalog.list_skills().len(),
        "catalog loaded"
    );

    let addr = config.socket_addr()?;
    let app = create_app(AppState::new(catalog), &config);

    tracing::info!(static_dir = %config.static_dir.display(), "serving static assets under /static");
    tracing::info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await.inspect_err(|e| {
        tracing::error!(error = %e, %addr, "failed to bind");
    })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
