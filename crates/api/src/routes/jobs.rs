//! Route definitions for job postings.

use axum::routing::get;
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Job routes mounted at `/jobs`.
///
/// ```text
/// GET    /      -> list_jobs
/// POST   /      -> create_job
/// GET    /{id}  -> get_job
/// PUT    /{id}  -> update_job
/// DELETE /{id}  -> delete_job
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::list_jobs).post(jobs::create_job))
        .route(
            "/{id}",
            get(jobs::get_job)
                .put(jobs::update_job)
                .delete(jobs::delete_job),
        )
}
