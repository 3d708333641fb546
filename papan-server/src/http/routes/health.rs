//! Liveness check that also touches the board store

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the store does not answer
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health - 200 when the store answers `SELECT 1`, 503 otherwise
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, database) = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, "ok", "reachable"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::db::create_pool;

    async fn state_in(dir: &tempfile::TempDir) -> Arc<AppState> {
        let config = ServerConfig {
            db_path: dir.path().join("health.db"),
            upload_dir: dir.path().join("uploads"),
            ..ServerConfig::default()
        };
        let pool = create_pool(&config.db_path).await.unwrap();
        Arc::new(AppState::new(pool, config).unwrap())
    }

    #[tokio::test]
    async fn reports_reachable_store() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir).await;

        let (code, Json(body)) = health(State(state)).await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "reachable");
    }

    #[tokio::test]
    async fn closed_pool_is_degraded() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir).await;
        state.pool.close().await;

        let (code, Json(body)) = health(State(state)).await;
        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.database, "unreachable");
    }
}
