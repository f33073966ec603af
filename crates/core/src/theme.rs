//! Curated theme validation.
//!
//! Provides length limits and name/category/tag validation helpers shared by
//! the create and partial-update endpoints.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a theme name.
pub const MAX_THEME_NAME_LEN: usize = 200;

/// Maximum length for a theme category.
pub const MAX_CATEGORY_LEN: usize = 100;

/// Maximum length for a single tag.
pub const MAX_TAG_LEN: usize = 50;

/// Maximum number of tags on a theme.
pub const MAX_TAGS: usize = 32;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a theme name: non-empty and within length limit.
pub fn validate_theme_name(name: &str) -> Result<(), CoreError> {
    validate_bounded("Theme name", name, MAX_THEME_NAME_LEN)
}

/// Validate a theme category: non-empty and within length limit.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    validate_bounded("Category", category, MAX_CATEGORY_LEN)
}

/// Validate a tag list: bounded size, every tag non-empty and short.
pub fn validate_tags(tags: &[String]) -> Result<(), CoreError> {
    if tags.len() > MAX_TAGS {
        return Err(CoreError::Validation(format!(
            "Too many tags: {} (max {MAX_TAGS})",
            tags.len()
        )));
    }
    for tag in tags {
        validate_bounded("Tag", tag, MAX_TAG_LEN)?;
    }
    Ok(())
}

fn validate_bounded(label: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{label} must not be empty")));
    }
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{label} too long: {len} chars (max {max})"
        )));
    }
    Ok(())
}
