//! Route definitions for declared exam results.

use axum::routing::get;
use axum::Router;

use crate::handlers::job_results;
use crate::state::AppState;

/// Result routes mounted at `/results`.
///
/// ```text
/// GET    /      -> list_results
/// POST   /      -> create_result
/// GET    /{id}  -> get_result
/// PUT    /{id}  -> update_result
/// DELETE /{id}  -> delete_result
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(job_results::list_results).post(job_results::create_result),
        )
        .route(
            "/{id}",
            get(job_results::get_result)
                .put(job_results::update_result)
                .delete(job_results::delete_result),
        )
}
