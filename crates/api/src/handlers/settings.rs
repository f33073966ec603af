//! Handlers for per-project settings.
//!
//! Lookups by project path answer `200` with a `null` payload when nothing
//! is stored; only activating an unknown or inactive theme is a 404.

use axum::extract::{Query, State};
use axum::Json;

use studio_core::error::CoreError;
use studio_core::settings;
use studio_db::models::project_settings::{ProjectSettings, RecordFramework, SetActiveTheme};
use studio_db::repositories::{ProjectSettingsRepo, ThemeRepo};

use crate::error::{AppError, AppResult};
use crate::query::ProjectPathParams;
use crate::response::{
    ActiveThemeResponse, ProjectSettingsResponse, ProjectSettingsSuccessResponse,
};
use crate::state::AppState;

/// Attach the resolved active theme to a settings row.
async fn with_active_theme(
    pool: &sqlx::PgPool,
    settings: ProjectSettings,
) -> AppResult<ProjectSettingsResponse> {
    let active_theme = match settings.active_theme_id {
        Some(theme_id) => ThemeRepo::find_by_id(pool, theme_id).await?,
        None => None,
    };
    Ok(ProjectSettingsResponse {
        settings,
        active_theme,
    })
}

// ---------------------------------------------------------------------------
// GET /settings/active-theme
// ---------------------------------------------------------------------------

/// Get the active theme for a project, or `null` if none resolves.
pub async fn get_active_theme(
    State(state): State<AppState>,
    Query(params): Query<ProjectPathParams>,
) -> AppResult<Json<ActiveThemeResponse>> {
    settings::validate_project_path(&params.project_path)?;

    let active_theme = ProjectSettingsRepo::get_active_theme(&state.pool, &params.project_path).await?;

    Ok(Json(ActiveThemeResponse {
        success: true,
        active_theme,
    }))
}

// ---------------------------------------------------------------------------
// PUT /settings/active-theme
// ---------------------------------------------------------------------------

/// Activate a theme for a project, creating its settings row if needed.
///
/// The theme resolved by the existence check is the one returned.
pub async fn set_active_theme(
    State(state): State<AppState>,
    Json(input): Json<SetActiveTheme>,
) -> AppResult<Json<ActiveThemeResponse>> {
    settings::validate_project_path(&input.project_path)?;

    let theme = ThemeRepo::find_by_id(&state.pool, input.theme_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CuratedTheme",
            id: input.theme_id,
        }))?;

    let stored =
        ProjectSettingsRepo::set_active_theme(&state.pool, &input.project_path, theme.id).await?;

    tracing::info!(
        settings_id = stored.id,
        theme_id = theme.id,
        project_path = %input.project_path,
        "Active theme set",
    );

    Ok(Json(ActiveThemeResponse {
        success: true,
        active_theme: Some(theme),
    }))
}

// ---------------------------------------------------------------------------
// GET /settings/project
// ---------------------------------------------------------------------------

/// Get the full settings for a project, or `null` if none are stored.
pub async fn get_project_settings(
    State(state): State<AppState>,
    Query(params): Query<ProjectPathParams>,
) -> AppResult<Json<ProjectSettingsSuccessResponse>> {
    settings::validate_project_path(&params.project_path)?;

    let settings = match ProjectSettingsRepo::find_by_project_path(&state.pool, &params.project_path)
        .await?
    {
        Some(row) => Some(with_active_theme(&state.pool, row).await?),
        None => None,
    };

    Ok(Json(ProjectSettingsSuccessResponse {
        success: true,
        settings,
    }))
}

// ---------------------------------------------------------------------------
// PUT /settings/framework
// ---------------------------------------------------------------------------

/// Record the framework detected in a project.
pub async fn record_framework(
    State(state): State<AppState>,
    Json(input): Json<RecordFramework>,
) -> AppResult<Json<ProjectSettingsSuccessResponse>> {
    settings::validate_project_path(&input.project_path)?;
    settings::validate_framework_type(&input.framework_type)?;

    let stored = ProjectSettingsRepo::record_framework(
        &state.pool,
        &input.project_path,
        &input.framework_type,
    )
    .await?;

    tracing::info!(
        settings_id = stored.id,
        framework_type = %input.framework_type,
        project_path = %input.project_path,
        "Project framework recorded",
    );

    let settings = with_active_theme(&state.pool, stored).await?;
    Ok(Json(ProjectSettingsSuccessResponse {
        success: true,
        settings: Some(settings),
    }))
}
