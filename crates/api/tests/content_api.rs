//! Integration tests for the dynamic content endpoints.
//!
//! Storage-failure tests use a handle pointing at a dead port with a short
//! server-selection timeout, so they run without a MongoDB server. The
//! end-to-end merge/read tests need a live server: set `MONGODB_TEST_URL`
//! to run them; they skip otherwise.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, get, put_json};

// ---------------------------------------------------------------------------
// Storage failure paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_with_unreachable_storage_returns_500() {
    let app = common::build_test_app(common::unreachable_db());
    let response = put_json(
        app,
        "/api/v1/update_dynamic_content",
        serde_json::json!({ "about_us": "We help job seekers." }),
    )
    .await;

    // The failure must surface as a sanitized 500 envelope, never as an
    // unhandled error at the HTTP layer.
    assert_error(response, StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR").await;
}

#[tokio::test]
async fn get_with_unreachable_storage_returns_500() {
    let app = common::build_test_app(common::unreachable_db());
    let response = get(app, "/api/v1/get_dynamic_content").await;

    assert_error(response, StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR").await;
}

// ---------------------------------------------------------------------------
// End-to-end merge semantics (require MONGODB_TEST_URL)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_before_any_update_returns_404() {
    let Some(db) = common::live_db("jobport_test_content_get_empty").await else {
        eprintln!("MONGODB_TEST_URL not set; skipping");
        return;
    };

    let app = common::build_test_app(db);
    let response = get(app, "/api/v1/get_dynamic_content").await;

    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[tokio::test]
async fn first_update_creates_the_document() {
    let Some(db) = common::live_db("jobport_test_content_create").await else {
        eprintln!("MONGODB_TEST_URL not set; skipping");
        return;
    };

    let app = common::build_test_app(db.clone());
    let response = put_json(
        app,
        "/api/v1/update_dynamic_content",
        serde_json::json!({ "about_us": "We help job seekers." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(db);
    let response = get(app, "/api/v1/get_dynamic_content").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["about_us"], "We help job seekers.");
    // Fields never supplied must be absent, not empty strings.
    assert!(json["data"].get("privacy_policy").is_none());
    assert!(json["data"].get("help_center").is_none());
}

#[tokio::test]
async fn update_reflects_most_recent_values() {
    let Some(db) = common::live_db("jobport_test_content_latest").await else {
        eprintln!("MONGODB_TEST_URL not set; skipping");
        return;
    };

    let app = common::build_test_app(db.clone());
    put_json(
        app,
        "/api/v1/update_dynamic_content",
        serde_json::json!({ "help_center": "First draft" }),
    )
    .await;

    let app = common::build_test_app(db.clone());
    put_json(
        app,
        "/api/v1/update_dynamic_content",
        serde_json::json!({ "help_center": "Second draft" }),
    )
    .await;

    let app = common::build_test_app(db);
    let json = body_json(get(app, "/api/v1/get_dynamic_content").await).await;
    assert_eq!(json["data"]["help_center"], "Second draft");
}

#[tokio::test]
async fn disjoint_updates_merge_instead_of_replacing() {
    let Some(db) = common::live_db("jobport_test_content_merge").await else {
        eprintln!("MONGODB_TEST_URL not set; skipping");
        return;
    };

    let app = common::build_test_app(db.clone());
    put_json(
        app,
        "/api/v1/update_dynamic_content",
        serde_json::json!({ "privacy_policy": "No tracking." }),
    )
    .await;

    let app = common::build_test_app(db.clone());
    put_json(
        app,
        "/api/v1/update_dynamic_content",
        serde_json::json!({ "contact_support_email": "support@example.org" }),
    )
    .await;

    let app = common::build_test_app(db);
    let json = body_json(get(app, "/api/v1/get_dynamic_content").await).await;

    // Union of both updates, not the last body alone.
    assert_eq!(json["data"]["privacy_policy"], "No tracking.");
    assert_eq!(json["data"]["contact_support_email"], "support@example.org");
}

#[tokio::test]
async fn empty_string_does_not_change_a_stored_field() {
    let Some(db) = common::live_db("jobport_test_content_falsy").await else {
        eprintln!("MONGODB_TEST_URL not set; skipping");
        return;
    };

    let app = common::build_test_app(db.clone());
    put_json(
        app,
        "/api/v1/update_dynamic_content",
        serde_json::json!({ "contact_support_number": "1800-000-111" }),
    )
    .await;

    // An empty string means "leave unchanged", not "clear".
    let app = common::build_test_app(db.clone());
    let response = put_json(
        app,
        "/api/v1/update_dynamic_content",
        serde_json::json!({ "contact_support_number": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(db);
    let json = body_json(get(app, "/api/v1/get_dynamic_content").await).await;
    assert_eq!(json["data"]["contact_support_number"], "1800-000-111");
}

#[tokio::test]
async fn update_returns_the_post_update_document() {
    let Some(db) = common::live_db("jobport_test_content_after_image").await else {
        eprintln!("MONGODB_TEST_URL not set; skipping");
        return;
    };

    let app = common::build_test_app(db.clone());
    put_json(
        app,
        "/api/v1/update_dynamic_content",
        serde_json::json!({ "about_us": "Old text" }),
    )
    .await;

    let app = common::build_test_app(db);
    let response = put_json(
        app,
        "/api/v1/update_dynamic_content",
        serde_json::json!({ "privacy_policy": "New policy" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The response body is the merged after-image, not the input echoed.
    let json = body_json(response).await;
    assert_eq!(json["data"]["about_us"], "Old text");
    assert_eq!(json["data"]["privacy_policy"], "New policy");
}
