//! Repository for the `curated_themes` table.
//!
//! Themes are soft-deleted by clearing `is_active`. Every query in this
//! module and in the project settings repository filters through
//! [`ACTIVE_THEME_PREDICATE`], so an inactive row never reaches a caller.

use sqlx::PgPool;
use studio_core::pagination::Page;
use studio_core::types::DbId;

use crate::models::theme::{CreateCuratedTheme, CuratedTheme, ThemeFilter, UpdateCuratedTheme};

/// Column list for `curated_themes` queries. Always aliased as `ct`.
pub(crate) const THEME_COLUMNS: &str = "\
    ct.id, ct.name, ct.category, ct.description, ct.config, ct.tags, \
    ct.one_line_definition, ct.reference_style, ct.is_active, \
    ct.created_at, ct.updated_at";

/// Visibility predicate for themes. Requires the `ct` alias.
pub(crate) const ACTIVE_THEME_PREDICATE: &str = "ct.is_active = TRUE";

/// Provides data access for curated themes.
pub struct ThemeRepo;

impl ThemeRepo {
    /// Find an active theme by ID.
    ///
    /// Returns `None` for unknown and soft-deleted themes alike.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CuratedTheme>, sqlx::Error> {
        let query = format!(
            "SELECT {THEME_COLUMNS} FROM curated_themes ct \
             WHERE ct.id = $1 AND {ACTIVE_THEME_PREDICATE}"
        );
        sqlx::query_as::<_, CuratedTheme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active themes matching `filter`, returning one page and the
    /// total count of the filtered set.
    ///
    /// Category is matched in SQL. The tag filter runs over the fetched
    /// rows, and pagination slices the result afterwards.
    pub async fn list(
        pool: &PgPool,
        filter: &ThemeFilter,
        page: Page,
    ) -> Result<(Vec<CuratedTheme>, i64), sqlx::Error> {
        let query = format!(
            "SELECT {THEME_COLUMNS} FROM curated_themes ct \
             WHERE {ACTIVE_THEME_PREDICATE} \
               AND ($1::TEXT IS NULL OR ct.category = $1) \
             ORDER BY ct.id"
        );
        let mut items = sqlx::query_as::<_, CuratedTheme>(&query)
            .bind(&filter.category)
            .fetch_all(pool)
            .await?;

        if let Some(tag) = filter.tag.as_deref() {
            items.retain(|theme| theme.has_tag(tag));
        }

        Ok(page.apply(items))
    }

    /// Insert a new theme, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCuratedTheme,
    ) -> Result<CuratedTheme, sqlx::Error> {
        let query = format!(
            "INSERT INTO curated_themes AS ct \
                 (name, category, description, config, tags, one_line_definition, reference_style) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {THEME_COLUMNS}"
        );
        sqlx::query_as::<_, CuratedTheme>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.config)
            .bind(&input.tags)
            .bind(&input.one_line_definition)
            .bind(&input.reference_style)
            .fetch_one(pool)
            .await
    }

    /// Partially update an active theme.
    ///
    /// `NOT NULL` columns use `COALESCE`, so only provided values change.
    /// Nullable columns take a presence flag: a key sent as `null` clears
    /// the column, a missing key keeps it. Returns `None` if no active theme
    /// with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCuratedTheme,
    ) -> Result<Option<CuratedTheme>, sqlx::Error> {
        let query = format!(
            "UPDATE curated_themes AS ct SET \
                 name                = COALESCE($2, ct.name), \
                 category            = COALESCE($3, ct.category), \
                 description         = CASE WHEN $4 THEN $5 ELSE ct.description END, \
                 config              = COALESCE($6, ct.config), \
                 tags                = COALESCE($7, ct.tags), \
                 one_line_definition = CASE WHEN $8 THEN $9 ELSE ct.one_line_definition END, \
                 reference_style     = CASE WHEN $10 THEN $11 ELSE ct.reference_style END \
             WHERE ct.id = $1 AND {ACTIVE_THEME_PREDICATE} \
             RETURNING {THEME_COLUMNS}"
        );
        sqlx::query_as::<_, CuratedTheme>(&query)
            .bind(id)
            .bind(input.name.as_ref().and_then(|v| v.as_deref()))
            .bind(input.category.as_ref().and_then(|v| v.as_deref()))
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(input.config.as_ref().and_then(|v| v.as_ref()))
            .bind(input.tags.as_ref().and_then(|v| v.as_ref()))
            .bind(input.one_line_definition.is_some())
            .bind(input.one_line_definition.as_ref().and_then(|v| v.as_deref()))
            .bind(input.reference_style.is_some())
            .bind(input.reference_style.as_ref().and_then(|v| v.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a theme by clearing `is_active`.
    ///
    /// Returns `true` if an active row was deactivated; a second call for
    /// the same id returns `false`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE curated_themes AS ct SET is_active = FALSE \
             WHERE ct.id = $1 AND {ACTIVE_THEME_PREDICATE}"
        );
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
