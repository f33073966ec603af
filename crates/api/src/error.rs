use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use studio_core::error::CoreError;
use studio_mcp::McpApiError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds database and upstream
/// variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `studio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx that is not a constraint violation.
    ///
    /// Built through `From<sqlx::Error>`, which turns unique and foreign
    /// key violations into [`CoreError::Conflict`] first.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// The suggestion service failed, including its fallback.
    #[error("Upstream error: {0}")]
    Upstream(#[from] McpApiError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Suggestion service errors ---
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Suggestion service failed after fallback");
                upstream_failure()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn upstream_failure() -> (StatusCode, &'static str, String) {
    (
        StatusCode::BAD_GATEWAY,
        "UPSTREAM_ERROR",
        "Suggestion service unavailable".to_string(),
    )
}

/// Message for a PostgreSQL constraint violation the caller can act on.
///
/// - Unique violations on a constraint named `uq_*` (23505).
/// - Foreign key violations (23503).
fn constraint_conflict(err: &sqlx::Error) -> Option<String> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    let constraint = db_err.constraint().unwrap_or("unknown");
    match db_err.code().as_deref() {
        Some("23505") if constraint.starts_with("uq_") => Some(format!(
            "Duplicate value violates unique constraint: {constraint}"
        )),
        Some("23503") => Some(format!("Referenced row does not exist: {constraint}")),
        _ => None,
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match constraint_conflict(&err) {
            Some(msg) => AppError::Core(CoreError::Conflict(msg)),
            None => AppError::Database(err),
        }
    }
}

/// Classify a remaining sqlx error into an HTTP status, error code, and
/// message. `RowNotFound` maps to 404, everything else to a sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}
