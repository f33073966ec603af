//! Curated theme models and DTOs.
//!
//! A curated theme (preset) is a reusable style configuration: a category,
//! an ordered tag list, and an arbitrary JSON token payload.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use studio_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `curated_themes` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CuratedTheme {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub config: serde_json::Value,
    pub tags: Vec<String>,
    pub one_line_definition: Option<String>,
    pub reference_style: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CuratedTheme {
    /// Whether the tag list contains `tag` exactly.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new curated theme.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCuratedTheme {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    #[serde(default = "empty_config")]
    pub config: serde_json::Value,
    #[serde(default)]
    pub tags: Vec<String>,
    pub one_line_definition: Option<String>,
    pub reference_style: Option<String>,
}

/// DTO for partially updating a curated theme.
///
/// Fields left out of the request body stay untouched. Every field is
/// `Option<Option<T>>`: the outer layer records whether the key was sent,
/// the inner one whether it was `null`. A `null` clears the nullable
/// columns and is rejected by the API for the `NOT NULL` ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCuratedTheme {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub config: Option<Option<serde_json::Value>>,
    #[serde(default, deserialize_with = "present")]
    pub tags: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    pub one_line_definition: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub reference_style: Option<Option<String>>,
}

impl UpdateCuratedTheme {
    /// Names of `NOT NULL` columns the payload tries to set to `null`.
    pub fn nulled_required_fields(&self) -> Vec<&'static str> {
        [
            ("name", matches!(self.name, Some(None))),
            ("category", matches!(self.category, Some(None))),
            ("config", matches!(self.config, Some(None))),
            ("tags", matches!(self.tags, Some(None))),
        ]
        .into_iter()
        .filter_map(|(field, nulled)| nulled.then_some(field))
        .collect()
    }
}

/// Mark a key as present even when its value is `null`.
///
/// Paired with `#[serde(default)]`, an absent key stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Optional filters for listing themes.
#[derive(Debug, Clone, Default)]
pub struct ThemeFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Keep only themes whose tag list contains this value.
    pub tag: Option<String>,
}

fn empty_config() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
