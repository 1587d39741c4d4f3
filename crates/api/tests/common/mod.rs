//! Shared helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use mongodb::options::{ClientOptions, ServerAddress};
use mongodb::{Client, Database};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use jobport_api::config::ServerConfig;
use jobport_api::routes;
use jobport_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        mongodb_url: "mongodb://localhost:27017".to_string(),
        mongodb_db: "jobport_test".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database handle.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(db: Database) -> Router {
    let config = test_config();

    let state = AppState {
        db,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
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
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
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
// Database fixtures
// ---------------------------------------------------------------------------

/// Handle to a live MongoDB for end-to-end tests.
///
/// Reads `MONGODB_TEST_URL`; returns `None` when unset, in which case the
/// caller skips the test. Each caller passes a distinct database name so
/// concurrently running tests do not interfere; the database is dropped
/// before the handle is returned.
pub async fn live_db(db_name: &str) -> Option<Database> {
    let url = std::env::var("MONGODB_TEST_URL").ok()?;
    let client = Client::with_uri_str(&url)
        .await
        .expect("Failed to connect to test MongoDB");
    let db = client.database(db_name);
    db.drop().await.expect("Failed to reset test database");
    Some(db)
}

/// Handle pointing at a port nothing listens on, with a short
/// server-selection timeout so operations fail fast.
///
/// Used to exercise the storage-failure (500) paths without a server, and
/// as an inert handle for tests that never touch the database (the driver
/// connects lazily).
pub fn unreachable_db() -> Database {
    let options = ClientOptions::builder()
        .hosts(vec![ServerAddress::Tcp {
            host: "127.0.0.1".to_string(),
            port: Some(9),
        }])
        .server_selection_timeout(Some(Duration::from_millis(200)))
        .build();

    Client::with_options(options)
        .expect("Failed to build MongoDB client")
        .database("jobport_test")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, json).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, json).await
}

/// Send a DELETE request to the app.
pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn send_json(app: Router, method: Method, uri: &str, json: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response is an error envelope with the given status and code.
pub async fn assert_error(response: Response, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    assert!(
        json["error"].as_str().is_some_and(|m| !m.is_empty()),
        "error message must be non-empty"
    );
}
