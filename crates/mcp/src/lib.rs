//! Client for the external MCP suggestion service.
//!
//! [`api::McpApi`] wraps the service's HTTP endpoints; [`gateway`] adds the
//! primary-then-defaults recovery policy used by the theme suggestion route.

pub mod api;
pub mod gateway;

pub use api::{McpApi, McpApiError};
pub use gateway::{suggest_with_fallback, SuggestionSource};
