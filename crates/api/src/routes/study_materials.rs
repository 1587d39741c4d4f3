//! Route definitions for study materials.

use axum::routing::get;
use axum::Router;

use crate::handlers::study_materials;
use crate::state::AppState;

/// Study material routes mounted at `/study-materials`.
///
/// ```text
/// GET    /      -> list_study_materials
/// POST   /      -> create_study_material
/// GET    /{id}  -> get_study_material
/// PUT    /{id}  -> update_study_material
/// DELETE /{id}  -> delete_study_material
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(study_materials::list_study_materials).post(study_materials::create_study_material),
        )
        .route(
            "/{id}",
            get(study_materials::get_study_material)
                .put(study_materials::update_study_material)
                .delete(study_materials::delete_study_material),
        )
}
