//! HTTP-level integration tests for the recruitment entity endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without a TCP listener. These tests need a live MongoDB: set
//! `MONGODB_TEST_URL` to run them; they skip otherwise.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, delete, get, post_json, put_json};

/// Extract the hex id of a created document from a `{ "data": ... }` body.
fn created_id(json: &serde_json::Value) -> String {
    json["data"]["_id"]["$oid"]
        .as_str()
        .expect("created document must carry an _id")
        .to_string()
}

// ---------------------------------------------------------------------------
// Job CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn job_create_get_update_delete_round_trip() {
    let Some(db) = common::live_db("jobport_test_job_crud").await else {
        eprintln!("MONGODB_TEST_URL not set; skipping");
        return;
    };

    // Create.
    let app = common::build_test_app(db.clone());
    let response = post_json(
        app,
        "/api/v1/jobs",
        serde_json::json!({
            "title": "Staff Nurse Recruitment 2026",
            "department": "Health Department",
            "apply_link": "https://example.org/apply",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["title"], "Staff Nurse Recruitment 2026");
    assert_eq!(created["data"]["status"], "active");
    let id = created_id(&created);

    // Get.
    let app = common::build_test_app(db.clone());
    let response = get(app, &format!("/api/v1/jobs/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["department"], "Health Department");

    // Partial update: only the named field changes.
    let app = common::build_test_app(db.clone());
    let response = put_json(
        app,
        &format!("/api/v1/jobs/{id}"),
        serde_json::json!({ "status": "inactive" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "inactive");
    assert_eq!(json["data"]["title"], "Staff Nurse Recruitment 2026");

    // Delete, then 404.
    let app = common::build_test_app(db.clone());
    let response = delete(app, &format!("/api/v1/jobs/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(db);
    let response = get(app, &format!("/api/v1/jobs/{id}")).await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[tokio::test]
async fn job_list_filters_by_status() {
    let Some(db) = common::live_db("jobport_test_job_list").await else {
        eprintln!("MONGODB_TEST_URL not set; skipping");
        return;
    };

    for (title, status) in [
        ("Forest Guard Recruitment", "active"),
        ("Archived Clerk Posting", "inactive"),
    ] {
        let app = common::build_test_app(db.clone());
        let response = post_json(
            app,
            "/api/v1/jobs",
            serde_json::json!({ "title": title, "status": status }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(db);
    let response = get(app, "/api/v1/jobs?status=active").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let jobs = json["data"].as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["title"], "Forest Guard Recruitment");
}

#[tokio::test]
async fn get_nonexistent_job_returns_404() {
    let Some(db) = common::live_db("jobport_test_job_missing").await else {
        eprintln!("MONGODB_TEST_URL not set; skipping");
        return;
    };

    let app = common::build_test_app(db);
    // A well-formed ObjectId that matches nothing.
    let response = get(app, "/api/v1/jobs/0123456789abcdef01234567").await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

// ---------------------------------------------------------------------------
// Attached records
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admit_card_attaches_to_job_and_lists_by_job_id() {
    let Some(db) = common::live_db("jobport_test_admit_cards").await else {
        eprintln!("MONGODB_TEST_URL not set; skipping");
        return;
    };

    let app = common::build_test_app(db.clone());
    let job = body_json(
        post_json(
            app,
            "/api/v1/jobs",
            serde_json::json!({ "title": "Constable Recruitment" }),
        )
        .await,
    )
    .await;
    let job_id = created_id(&job);

    let app = common::build_test_app(db.clone());
    let response = post_json(
        app,
        "/api/v1/admit-cards",
        serde_json::json!({
            "job_id": job_id,
            "title": "Constable CBT Admit Card",
            "download_link": "https://example.org/admit-card.pdf",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(db);
    let response = get(app, &format!("/api/v1/admit-cards?job_id={job_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let cards = json["data"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["title"], "Constable CBT Admit Card");
    assert_eq!(cards[0]["job_id"]["$oid"], job_id.as_str());
}

#[tokio::test]
async fn result_partial_update_keeps_other_fields() {
    let Some(db) = common::live_db("jobport_test_results").await else {
        eprintln!("MONGODB_TEST_URL not set; skipping");
        return;
    };

    let app = common::build_test_app(db.clone());
    let job = body_json(
        post_json(
            app,
            "/api/v1/jobs",
            serde_json::json!({ "title": "Junior Engineer Recruitment" }),
        )
        .await,
    )
    .await;
    let job_id = created_id(&job);

    let app = common::build_test_app(db.clone());
    let result = body_json(
        post_json(
            app,
            "/api/v1/results",
            serde_json::json!({
                "job_id": job_id,
                "title": "JE Written Result",
                "description": "Provisional list",
            }),
        )
        .await,
    )
    .await;
    let id = created_id(&result);

    let app = common::build_test_app(db);
    let response = put_json(
        app,
        &format!("/api/v1/results/{id}"),
        serde_json::json!({ "download_link": "https://example.org/result.pdf" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["download_link"], "https://example.org/result.pdf");
    assert_eq!(json["data"]["description"], "Provisional list");
    assert_eq!(json["data"]["title"], "JE Written Result");
}

// ---------------------------------------------------------------------------
// States and cities
// ---------------------------------------------------------------------------

#[tokio::test]
async fn state_and_city_round_trip() {
    let Some(db) = common::live_db("jobport_test_locations").await else {
        eprintln!("MONGODB_TEST_URL not set; skipping");
        return;
    };

    let app = common::build_test_app(db.clone());
    let state = body_json(
        post_json(app, "/api/v1/states", serde_json::json!({ "name": "Kerala" })).await,
    )
    .await;
    let state_id = created_id(&state);

    let app = common::build_test_app(db.clone());
    let response = post_json(
        app,
        &format!("/api/v1/states/{state_id}/cities"),
        serde_json::json!({ "name": "Kochi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(db);
    let response = get(app, &format!("/api/v1/states/{state_id}/cities")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let cities = json["data"].as_array().unwrap();
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0]["name"], "Kochi");
}
