//! Handlers for curated themes.
//!
//! CRUD over the `curated_themes` table plus the suggestion endpoint backed
//! by the MCP service. Soft-deleted themes answer 404 everywhere.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use studio_core::error::CoreError;
use studio_core::pagination::Page;
use studio_core::theme;
use studio_core::types::DbId;
use studio_db::models::theme::{
    CreateCuratedTheme, CuratedTheme, ThemeFilter, UpdateCuratedTheme,
};
use studio_db::repositories::ThemeRepo;

use crate::error::{AppError, AppResult};
use crate::response::ThemeListResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for `GET /themes`.
#[derive(Debug, Deserialize)]
pub struct ListThemesParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    /// A single tag the theme must carry.
    pub tags: Option<String>,
}

/// Query parameters for `GET /themes/suggestions`.
#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    pub context: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn theme_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "CuratedTheme",
        id,
    })
}

/// Treat `?category=` the same as an absent parameter.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn validate_create(input: &CreateCuratedTheme) -> AppResult<()> {
    theme::validate_theme_name(&input.name)?;
    theme::validate_category(&input.category)?;
    theme::validate_tags(&input.tags)?;
    Ok(())
}

fn validate_update(input: &UpdateCuratedTheme) -> AppResult<()> {
    let nulled = input.nulled_required_fields();
    if !nulled.is_empty() {
        return Err(CoreError::Validation(format!(
            "Fields cannot be null: {}",
            nulled.join(", ")
        ))
        .into());
    }
    if let Some(Some(ref name)) = input.name {
        theme::validate_theme_name(name)?;
    }
    if let Some(Some(ref category)) = input.category {
        theme::validate_category(category)?;
    }
    if let Some(Some(ref tags)) = input.tags {
        theme::validate_tags(tags)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /themes/suggestions
// ---------------------------------------------------------------------------

/// Theme suggestions from the MCP service, falling back to its default set.
pub async fn get_theme_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionParams>,
) -> AppResult<Json<Vec<CuratedTheme>>> {
    let context = non_empty(params.context);
    let themes =
        studio_mcp::suggest_with_fallback(state.suggestions.as_ref(), context.as_deref()).await?;
    Ok(Json(themes))
}

// ---------------------------------------------------------------------------
// GET /themes
// ---------------------------------------------------------------------------

/// List active themes with optional category/tag filters and pagination.
pub async fn list_themes(
    State(state): State<AppState>,
    Query(params): Query<ListThemesParams>,
) -> AppResult<Json<ThemeListResponse>> {
    let page = Page::new(params.skip, params.limit)?;
    let filter = ThemeFilter {
        category: non_empty(params.category),
        tag: non_empty(params.tags),
    };

    let (items, total) = ThemeRepo::list(&state.pool, &filter, page).await?;
    tracing::debug!(count = items.len(), total, "Listed curated themes");

    Ok(Json(ThemeListResponse {
        items,
        total,
        skip: page.skip,
        limit: page.limit,
    }))
}

// ---------------------------------------------------------------------------
// GET /themes/{id}
// ---------------------------------------------------------------------------

/// Get a single active theme by ID.
pub async fn get_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<Json<CuratedTheme>> {
    let theme = ThemeRepo::find_by_id(&state.pool, theme_id)
        .await?
        .ok_or_else(|| theme_not_found(theme_id))?;
    Ok(Json(theme))
}

// ---------------------------------------------------------------------------
// POST /themes
// ---------------------------------------------------------------------------

/// Create a new curated theme.
pub async fn create_theme(
    State(state): State<AppState>,
    Json(input): Json<CreateCuratedTheme>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;

    let theme = ThemeRepo::create(&state.pool, &input).await?;
    tracing::info!(
        theme_id = theme.id,
        name = %theme.name,
        category = %theme.category,
        "Curated theme created",
    );

    Ok((StatusCode::CREATED, Json(theme)))
}

// ---------------------------------------------------------------------------
// PATCH /themes/{id}
// ---------------------------------------------------------------------------

/// Partially update an active theme. Only provided fields change; `null`
/// clears `description`, `one_line_definition` and `reference_style`.
pub async fn update_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
    Json(input): Json<UpdateCuratedTheme>,
) -> AppResult<Json<CuratedTheme>> {
    validate_update(&input)?;

    let theme = ThemeRepo::update(&state.pool, theme_id, &input)
        .await?
        .ok_or_else(|| theme_not_found(theme_id))?;
    tracing::info!(theme_id, "Curated theme updated");

    Ok(Json(theme))
}

// ---------------------------------------------------------------------------
// DELETE /themes/{id}
// ---------------------------------------------------------------------------

/// Soft-delete a theme.
pub async fn delete_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ThemeRepo::soft_delete(&state.pool, theme_id).await?;
    if !deleted {
        return Err(theme_not_found(theme_id));
    }

    tracing::info!(theme_id, "Curated theme deactivated");
    Ok(StatusCode::NO_CONTENT)
}
