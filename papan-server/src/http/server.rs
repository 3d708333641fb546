//! Axum server setup
//!
//! Server skeleton with:
//! - Explicit schema step before binding
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use super::views::Views;
use crate::config::ServerConfig;
use crate::db::{create_pool, ensure_schema};
use crate::models::upload::UPLOADS_ROUTE;
use crate::uploads::UploadDir;

/// Shared application state
///
/// Built once at startup and handed to every handler through axum's
/// `State` extractor.
pub struct AppState {
    pub pool: SqlitePool,
    pub uploads: UploadDir,
    pub views: Views,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: ServerConfig) -> Result<Self, ServerError> {
        Ok(Self {
            pool,
            uploads: UploadDir::new(&config.upload_dir),
            views: Views::new()?,
            config,
        })
    }
}

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    let uploads = ServeDir::new(state.uploads.root());
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .merge(routes::health::router())
        .merge(routes::boards::router())
        .merge(routes::items::router())
        .nest_service(UPLOADS_ROUTE, uploads)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// run_server(ServerConfig::default()).await?;
/// ```
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let pool = create_pool(&config.db_path).await?;
    ensure_schema(&pool).await?;
    tracing::info!(db = %config.db_path.display(), "Database ready");

    let state = AppState::new(pool, config.clone())?;
    state.uploads.ensure().await?;
    tracing::info!(uploads = %state.uploads.root().display(), "Upload directory ready");

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
