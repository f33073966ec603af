pub mod health;
pub mod settings;
pub mod themes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v2` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /themes                      list, create
/// /themes/suggestions          MCP suggestions with default fallback
/// /themes/{id}                 get, patch, delete (soft)
///
/// /settings/active-theme       get, put (?project_path= / body)
/// /settings/project            get (?project_path=)
/// /settings/framework          put
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/themes", themes::router())
        .nest("/settings", settings::router())
}
