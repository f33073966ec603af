//! HTTP-level integration tests for the project settings endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Absence is a successful null
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_active_theme_for_unknown_project_is_null(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v2/settings/active-theme?project_path=/unknown").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["active_theme"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_settings_for_unknown_project_is_null(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v2/settings/project?project_path=/unknown").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["settings"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_project_path_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v2/settings/active-theme?project_path=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v2/settings/active-theme",
        json!({"theme_id": 1, "project_path": "x".repeat(1025)}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Activation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_active_theme_for_unknown_theme_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v2/settings/active-theme",
        json!({"theme_id": 999999, "project_path": "/p"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Settings were not touched.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v2/settings/project?project_path=/p").await).await;
    assert!(json["settings"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_activation_lifecycle_with_soft_delete(pool: PgPool) {
    // POST theme.
    let id = common::create_theme(
        &pool,
        json!({"name": "Dark Minimal", "category": "dark", "tags": ["minimal"]}),
    )
    .await;

    // PUT active theme.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v2/settings/active-theme",
        json!({"theme_id": id, "project_path": "/p"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["active_theme"]["id"], id);

    // GET resolves it.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v2/settings/active-theme?project_path=/p").await).await;
    assert_eq!(json["active_theme"]["id"], id);

    // DELETE theme.
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v2/themes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // GET now resolves to null.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v2/settings/active-theme?project_path=/p").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["active_theme"].is_null());

    // Re-activating the deleted theme is a 404.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v2/settings/active-theme",
        json!({"theme_id": id, "project_path": "/p"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reactivation_swaps_reference_on_same_row(pool: PgPool) {
    let first = common::create_theme(&pool, json!({"name": "One", "category": "dark"})).await;
    let second = common::create_theme(&pool, json!({"name": "Two", "category": "light"})).await;

    for theme_id in [first, second] {
        let app = common::build_test_app(pool.clone());
        let response = put_json(
            app,
            "/api/v2/settings/active-theme",
            json!({"theme_id": theme_id, "project_path": "/proj"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v2/settings/project?project_path=/proj").await).await;
    let settings = &json["settings"];
    assert_eq!(settings["project_path"], "/proj");
    assert_eq!(settings["active_theme_id"], second);
    assert_eq!(settings["active_theme"]["name"], "Two");
    assert!(settings["framework_type"].is_null());
    assert!(settings["detected_at"].is_null());

    let rows: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM project_settings WHERE project_path = '/proj'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(rows, 1);
}

// ---------------------------------------------------------------------------
// Project settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_settings_hide_inactive_theme(pool: PgPool) {
    let id = common::create_theme(&pool, json!({"name": "Brief", "category": "dark"})).await;

    let app = common::build_test_app(pool.clone());
    put_json(
        app,
        "/api/v2/settings/active-theme",
        json!({"theme_id": id, "project_path": "/p"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    delete(app, &format!("/api/v2/themes/{id}")).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v2/settings/project?project_path=/p").await).await;
    assert_eq!(json["settings"]["active_theme_id"], id);
    assert!(json["settings"]["active_theme"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_framework_creates_settings_without_theme(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v2/settings/framework",
        json!({"project_path": "/web", "framework_type": "nextjs"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["settings"]["framework_type"], "nextjs");
    assert!(json["settings"]["detected_at"].is_string());
    assert!(json["settings"]["active_theme_id"].is_null());

    // A row with a null reference resolves like a missing row.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v2/settings/active-theme?project_path=/web").await).await;
    assert_eq!(json["success"], true);
    assert!(json["active_theme"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_framework_rejects_blank_framework(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v2/settings/framework",
        json!({"project_path": "/web", "framework_type": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
