//! Response envelope types for API handlers.
//!
//! Settings endpoints wrap their payload in `{ "success": true, ... }` with a
//! nullable payload field; theme endpoints return the record directly.

use serde::Serialize;
use studio_db::models::project_settings::ProjectSettings;
use studio_db::models::theme::CuratedTheme;

/// `{ "success", "active_theme" }` for the active-theme endpoints.
///
/// `active_theme` is `null` when the project has no resolvable theme.
#[derive(Debug, Serialize)]
pub struct ActiveThemeResponse {
    pub success: bool,
    pub active_theme: Option<CuratedTheme>,
}

/// A settings row with its active theme resolved.
#[derive(Debug, Serialize)]
pub struct ProjectSettingsResponse {
    #[serde(flatten)]
    pub settings: ProjectSettings,
    /// `null` when no theme is set or the referenced theme is inactive.
    pub active_theme: Option<CuratedTheme>,
}

/// `{ "success", "settings" }` for the project settings endpoints.
#[derive(Debug, Serialize)]
pub struct ProjectSettingsSuccessResponse {
    pub success: bool,
    pub settings: Option<ProjectSettingsResponse>,
}

/// One page of themes plus the filtered total.
#[derive(Debug, Serialize)]
pub struct ThemeListResponse {
    pub items: Vec<CuratedTheme>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}
