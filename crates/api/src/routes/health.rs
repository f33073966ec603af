//! Root-level liveness endpoint.
//!
//! Reports database reachability and which suggestion service this instance
//! is wired to. The suggestion service is not called; a slow MCP server
//! must not make the health check time out.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Base URL of the configured MCP suggestion service.
    pub mcp_server_url: String,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = studio_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check: database unreachable");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        mcp_server_url: state.config.mcp_server_url.clone(),
    })
}

/// `GET /health`, mounted outside `/api/v2`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
