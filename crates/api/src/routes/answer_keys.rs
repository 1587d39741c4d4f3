//! Route definitions for answer keys.

use axum::routing::get;
use axum::Router;

use crate::handlers::answer_keys;
use crate::state::AppState;

/// Answer key routes mounted at `/answer-keys`.
///
/// ```text
/// GET    /      -> list_answer_keys
/// POST   /      -> create_answer_key
/// GET    /{id}  -> get_answer_key
/// PUT    /{id}  -> update_answer_key
/// DELETE /{id}  -> delete_answer_key
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(answer_keys::list_answer_keys).post(answer_keys::create_answer_key),
        )
        .route(
            "/{id}",
            get(answer_keys::get_answer_key)
                .put(answer_keys::update_answer_key)
                .delete(answer_keys::delete_answer_key),
        )
}
