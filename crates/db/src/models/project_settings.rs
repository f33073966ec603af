//! Per-project settings model.
//!
//! One row per project path. `active_theme_id` is a non-owning reference
//! into `curated_themes`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studio_core::types::{DbId, Timestamp};

/// A row from the `project_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSettings {
    pub id: DbId,
    pub project_path: String,
    pub active_theme_id: Option<DbId>,
    pub framework_type: Option<String>,
    pub detected_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `PUT /settings/active-theme`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetActiveTheme {
    pub theme_id: DbId,
    pub project_path: String,
}

/// Request body for `PUT /settings/framework`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordFramework {
    pub project_path: String,
    pub framework_type: String,
}
