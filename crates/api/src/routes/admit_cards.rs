//! Route definitions for admit cards.

use axum::routing::get;
use axum::Router;

use crate::handlers::admit_cards;
use crate::state::AppState;

/// Admit card routes mounted at `/admit-cards`.
///
/// ```text
/// GET    /      -> list_admit_cards
/// POST   /      -> create_admit_card
/// GET    /{id}  -> get_admit_card
/// PUT    /{id}  -> update_admit_card
/// DELETE /{id}  -> delete_admit_card
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(admit_cards::list_admit_cards).post(admit_cards::create_admit_card),
        )
        .route(
            "/{id}",
            get(admit_cards::get_admit_card)
                .put(admit_cards::update_admit_card)
                .delete(admit_cards::delete_admit_card),
        )
}
