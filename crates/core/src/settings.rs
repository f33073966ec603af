//! Project settings validation.

use crate::error::CoreError;

/// Minimum length for a project path.
pub const MIN_PROJECT_PATH_LEN: usize = 1;

/// Maximum length for a project path.
pub const MAX_PROJECT_PATH_LEN: usize = 1024;

/// Maximum length for a detected framework identifier.
pub const MAX_FRAMEWORK_TYPE_LEN: usize = 100;

/// Validate a project path used as the settings lookup key.
pub fn validate_project_path(path: &str) -> Result<(), CoreError> {
    let len = path.chars().count();
    if !(MIN_PROJECT_PATH_LEN..=MAX_PROJECT_PATH_LEN).contains(&len) {
        return Err(CoreError::Validation(format!(
            "project_path must be between {MIN_PROJECT_PATH_LEN} and \
             {MAX_PROJECT_PATH_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate a framework identifier such as `nextjs` or `vite`.
pub fn validate_framework_type(framework_type: &str) -> Result<(), CoreError> {
    if framework_type.trim().is_empty() {
        return Err(CoreError::Validation(
            "framework_type must not be empty".to_string(),
        ));
    }
    if framework_type.len() > MAX_FRAMEWORK_TYPE_LEN {
        return Err(CoreError::Validation(format!(
            "framework_type too long: {} chars (max {MAX_FRAMEWORK_TYPE_LEN})",
            framework_type.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_path_bounds() {
        assert!(validate_project_path("").is_err());
        assert!(validate_project_path("/p").is_ok());
        assert!(validate_project_path(&"a".repeat(MAX_PROJECT_PATH_LEN)).is_ok());
        assert!(validate_project_path(&"a".repeat(MAX_PROJECT_PATH_LEN + 1)).is_err());
    }

    #[test]
    fn project_path_counts_characters_not_bytes() {
        let path = "é".repeat(MAX_PROJECT_PATH_LEN);
        assert!(validate_project_path(&path).is_ok());
    }

    #[test]
    fn framework_type_rejects_blank() {
        let err = validate_framework_type(" ").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
        assert!(validate_framework_type("nextjs").is_ok());
    }
}
