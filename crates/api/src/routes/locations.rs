//! Route definitions for state/city reference data.

use axum::routing::get;
use axum::Router;

use crate::handlers::locations;
use crate::state::AppState;

/// Location routes mounted directly under `/api/v1`.
///
/// ```text
/// GET    /states              -> list_states
/// POST   /states              -> create_state
/// GET    /states/{id}         -> get_state
/// PUT    /states/{id}         -> update_state
/// DELETE /states/{id}         -> delete_state
/// GET    /states/{id}/cities  -> list_cities
/// POST   /states/{id}/cities  -> create_city
/// GET    /cities/{id}         -> get_city
/// PUT    /cities/{id}         -> update_city
/// DELETE /cities/{id}         -> delete_city
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/states",
            get(locations::list_states).post(locations::create_state),
        )
        .route(
            "/states/{id}",
            get(locations::get_state)
                .put(locations::update_state)
                .delete(locations::delete_state),
        )
        .route(
            "/states/{id}/cities",
            get(locations::list_cities).post(locations::create_city),
        )
        .route(
            "/cities/{id}",
            get(locations::get_city)
                .put(locations::update_city)
                .delete(locations::delete_city),
        )
}
