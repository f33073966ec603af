//! Repository for the `project_settings` table.
//!
//! Rows are keyed by `project_path` (unique constraint
//! `uq_project_settings_project_path`). All writes are single-statement
//! `INSERT ... ON CONFLICT` upserts, so concurrent first writes for the same
//! path converge on one row.

use sqlx::PgPool;
use studio_core::types::DbId;

use super::theme_repo::{ACTIVE_THEME_PREDICATE, THEME_COLUMNS};
use crate::models::project_settings::ProjectSettings;
use crate::models::theme::CuratedTheme;

/// Column list for `project_settings` queries. Always aliased as `ps`.
const COLUMNS: &str = "\
    ps.id, ps.project_path, ps.active_theme_id, ps.framework_type, \
    ps.detected_at, ps.created_at, ps.updated_at";

/// Provides data access for per-project settings.
pub struct ProjectSettingsRepo;

impl ProjectSettingsRepo {
    /// Find the settings row for a project path.
    pub async fn find_by_project_path(
        pool: &PgPool,
        project_path: &str,
    ) -> Result<Option<ProjectSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_settings ps WHERE ps.project_path = $1");
        sqlx::query_as::<_, ProjectSettings>(&query)
            .bind(project_path)
            .fetch_optional(pool)
            .await
    }

    /// Resolve the active theme for a project path.
    ///
    /// Returns `None` when there is no settings row, when no theme is
    /// referenced, or when the referenced theme has been soft-deleted.
    pub async fn get_active_theme(
        pool: &PgPool,
        project_path: &str,
    ) -> Result<Option<CuratedTheme>, sqlx::Error> {
        let query = format!(
            "SELECT {THEME_COLUMNS} FROM project_settings ps \
             JOIN curated_themes ct ON ct.id = ps.active_theme_id \
             WHERE ps.project_path = $1 AND {ACTIVE_THEME_PREDICATE}"
        );
        sqlx::query_as::<_, CuratedTheme>(&query)
            .bind(project_path)
            .fetch_optional(pool)
            .await
    }

    /// Point a project at `theme_id`, creating the settings row if needed.
    ///
    /// Does not check that the theme is active; callers resolve the theme
    /// through `ThemeRepo::find_by_id` first.
    pub async fn set_active_theme(
        pool: &PgPool,
        project_path: &str,
        theme_id: DbId,
    ) -> Result<ProjectSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_settings AS ps (project_path, active_theme_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_project_settings_project_path DO UPDATE SET \
                 active_theme_id = EXCLUDED.active_theme_id \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectSettings>(&query)
            .bind(project_path)
            .bind(theme_id)
            .fetch_one(pool)
            .await
    }

    /// Record the framework detected for a project and stamp `detected_at`.
    ///
    /// Leaves `active_theme_id` untouched on existing rows.
    pub async fn record_framework(
        pool: &PgPool,
        project_path: &str,
        framework_type: &str,
    ) -> Result<ProjectSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_settings AS ps (project_path, framework_type, detected_at) \
             VALUES ($1, $2, NOW()) \
             ON CONFLICT ON CONSTRAINT uq_project_settings_project_path DO UPDATE SET \
                 framework_type = EXCLUDED.framework_type, \
                 detected_at = EXCLUDED.detected_at \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectSettings>(&query)
            .bind(project_path)
            .bind(framework_type)
            .fetch_one(pool)
            .await
    }
}
