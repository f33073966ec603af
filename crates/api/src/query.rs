//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// `?project_path=` lookup key for settings endpoints.
#[derive(Debug, Deserialize)]
pub struct ProjectPathParams {
    pub project_path: String,
}
