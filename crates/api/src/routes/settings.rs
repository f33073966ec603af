//! Route definitions for project settings, mounted at `/settings`.
//!
//! ```text
//! GET /active-theme    get_active_theme
//! PUT /active-theme    set_active_theme
//! GET /project         get_project_settings
//! PUT /framework       record_framework
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Project settings routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/active-theme",
            get(settings::get_active_theme).put(settings::set_active_theme),
        )
        .route("/project", get(settings::get_project_settings))
        .route("/framework", put(settings::record_framework))
}
