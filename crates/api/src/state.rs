use std::sync::Arc;

use studio_mcp::SuggestionSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: studio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Theme suggestion provider (the MCP service in production).
    pub suggestions: Arc<dyn SuggestionSource>,
}
