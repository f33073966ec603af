//! Theme suggestion gateway.
//!
//! The recovery policy is two sequential fallible calls: ask for
//! suggestions, and if that fails for any reason ask once for the default
//! set. A failure of the default call is returned to the caller as-is.

use async_trait::async_trait;
use studio_db::models::theme::CuratedTheme;

use crate::api::{McpApi, McpApiError};

/// A provider of theme suggestions.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Context-aware suggestions.
    async fn get_suggestions(&self, context: Option<&str>)
        -> Result<Vec<CuratedTheme>, McpApiError>;

    /// The provider's default theme set.
    async fn get_default_themes(&self) -> Result<Vec<CuratedTheme>, McpApiError>;
}

#[async_trait]
impl SuggestionSource for McpApi {
    async fn get_suggestions(
        &self,
        context: Option<&str>,
    ) -> Result<Vec<CuratedTheme>, McpApiError> {
        McpApi::get_suggestions(self, context).await
    }

    async fn get_default_themes(&self) -> Result<Vec<CuratedTheme>, McpApiError> {
        McpApi::get_default_themes(self).await
    }
}

/// Fetch suggestions, falling back to the default set on any failure.
pub async fn suggest_with_fallback(
    source: &dyn SuggestionSource,
    context: Option<&str>,
) -> Result<Vec<CuratedTheme>, McpApiError> {
    match source.get_suggestions(context).await {
        Ok(themes) => {
            tracing::debug!(count = themes.len(), "Theme suggestions received");
            Ok(themes)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Theme suggestions failed, using default themes");
            source.get_default_themes().await
        }
    }
}
