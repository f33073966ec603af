//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod project_settings_repo;
pub mod theme_repo;

pub use project_settings_repo::ProjectSettingsRepo;
pub use theme_repo::ThemeRepo;
