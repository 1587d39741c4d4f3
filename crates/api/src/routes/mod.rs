pub mod admit_cards;
pub mod answer_keys;
pub mod dynamic_content;
pub mod health;
pub mod job_results;
pub mod jobs;
pub mod locations;
pub mod study_materials;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /update_dynamic_content        update site content (PUT)
/// /get_dynamic_content           fetch site content (GET)
///
/// /jobs                          list, create
/// /jobs/{id}                     get, update, delete
///
/// /admit-cards                   list (?job_id, ?status), create
/// /admit-cards/{id}              get, update, delete
///
/// /answer-keys                   list (?job_id, ?status), create
/// /answer-keys/{id}              get, update, delete
///
/// /results                       list (?job_id, ?status), create
/// /results/{id}                  get, update, delete
///
/// /study-materials               list (?job_id, ?status), create
/// /study-materials/{id}          get, update, delete
///
/// /states                        list, create
/// /states/{id}                   get, update, delete
/// /states/{id}/cities            list, create
/// /cities/{id}                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Site-wide content. The two endpoints keep their legacy
        // verb-style paths.
        .merge(dynamic_content::router())
        // Job postings.
        .nest("/jobs", jobs::router())
        // Records attached to a parent job.
        .nest("/admit-cards", admit_cards::router())
        .nest("/answer-keys", answer_keys::router())
        .nest("/results", job_results::router())
        .nest("/study-materials", study_materials::router())
        // State/city reference data (top-level paths, not nested).
        .merge(locations::router())
}
