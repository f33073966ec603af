//! Shared domain types, error taxonomy, and input validation for the
//! curated theme backend.

pub mod error;
pub mod pagination;
pub mod settings;
pub mod theme;
pub mod types;
