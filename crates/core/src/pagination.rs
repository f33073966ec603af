//! Offset/limit pagination for list endpoints.
//!
//! Lists are filtered first and sliced afterwards, so the reported total
//! always reflects the full filtered set regardless of the page requested.

use serde::Serialize;

use crate::error::CoreError;

/// Default number of items to skip.
pub const DEFAULT_SKIP: i64 = 0;

/// Default page size.
pub const DEFAULT_LIMIT: i64 = 100;

/// Smallest accepted page size.
pub const MIN_LIMIT: i64 = 1;

/// Largest accepted page size.
pub const MAX_LIMIT: i64 = 1000;

/// A validated `skip`/`limit` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Page {
    /// Build a page from optional query values, applying defaults and
    /// rejecting out-of-range input.
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, CoreError> {
        let skip = skip.unwrap_or(DEFAULT_SKIP);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if skip < 0 {
            return Err(CoreError::Validation(format!(
                "skip must be >= 0, got {skip}"
            )));
        }
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(CoreError::Validation(format!(
                "limit must be between {MIN_LIMIT} and {MAX_LIMIT}, got {limit}"
            )));
        }

        Ok(Self { skip, limit })
    }

    /// Slice an already-filtered set, returning the page and the total
    /// count of the set before slicing.
    ///
    /// A `skip` past the end yields an empty page.
    pub fn apply<T>(&self, items: Vec<T>) -> (Vec<T>, i64) {
        let total = items.len() as i64;
        let page = items
            .into_iter()
            .skip(self.skip as usize)
            .take(self.limit as usize)
            .collect();
        (page, total)
    }
}
