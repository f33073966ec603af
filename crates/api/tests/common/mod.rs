#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use studio_api::config::ServerConfig;
use studio_api::routes;
use studio_api::state::AppState;
use studio_db::models::theme::CuratedTheme;
use studio_mcp::{McpApiError, SuggestionSource};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        mcp_server_url: "http://127.0.0.1:9".to_string(),
        mcp_timeout_secs: 1,
    }
}

/// Suggestion source with scripted outcomes; `None` means the call fails.
pub struct StubSuggestions {
    pub suggestions: Option<Vec<CuratedTheme>>,
    pub defaults: Option<Vec<CuratedTheme>>,
}

#[async_trait]
impl SuggestionSource for StubSuggestions {
    async fn get_suggestions(
        &self,
        _context: Option<&str>,
    ) -> Result<Vec<CuratedTheme>, McpApiError> {
        self.suggestions.clone().ok_or(McpApiError::ApiError {
            status: 503,
            body: "suggestions down".to_string(),
        })
    }

    async fn get_default_themes(&self) -> Result<Vec<CuratedTheme>, McpApiError> {
        self.defaults.clone().ok_or(McpApiError::ApiError {
            status: 500,
            body: "defaults down".to_string(),
        })
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a suggestion source that always fails.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(
        pool,
        StubSuggestions {
            suggestions: None,
            defaults: None,
        },
    )
}

/// Build the full application router with a custom suggestion source.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app_with(pool: PgPool, suggestions: impl SuggestionSource + 'static) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        suggestions: Arc::new(suggestions),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3000".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v2", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a theme through the API and return its id.
pub async fn create_theme(pool: &PgPool, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/api/v2/themes", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
