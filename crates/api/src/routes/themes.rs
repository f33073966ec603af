//! Route definitions for curated themes, mounted at `/themes`.
//!
//! ```text
//! GET    /               list_themes
//! POST   /               create_theme
//! GET    /suggestions    get_theme_suggestions
//! GET    /{id}           get_theme
//! PATCH  /{id}           update_theme
//! DELETE /{id}           delete_theme
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::themes;
use crate::state::AppState;

/// Curated theme routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(themes::list_themes).post(themes::create_theme))
        .route("/suggestions", get(themes::get_theme_suggestions))
        .route(
            "/{id}",
            get(themes::get_theme)
                .patch(themes::update_theme)
                .delete(themes::delete_theme),
        )
}
