//! Route definitions for the site-wide dynamic content document.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::dynamic_content;
use crate::state::AppState;

/// Content routes mounted directly under `/api/v1`.
///
/// ```text
/// PUT /update_dynamic_content -> update_dynamic_content
/// GET /get_dynamic_content    -> get_dynamic_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/update_dynamic_content",
            put(dynamic_content::update_dynamic_content),
        )
        .route(
            "/get_dynamic_content",
            get(dynamic_content::get_dynamic_content),
        )
}
