//! Handlers for the site-wide dynamic content document.
//!
//! One singleton document backs the portal's static pages (privacy policy,
//! about-us, help center) and contact details. Updates merge into it;
//! nothing deletes it.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use jobport_db::models::dynamic_content::UpdateDynamicContent;
use jobport_db::repositories::DynamicContentRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/update_dynamic_content
///
/// Merge the supplied fields into the content document, creating it on
/// first use. Fields that are absent or empty in the body are left
/// untouched (an empty string does not clear a stored value).
pub async fn update_dynamic_content(
    State(state): State<AppState>,
    Json(input): Json<UpdateDynamicContent>,
) -> AppResult<impl IntoResponse> {
    let content = DynamicContentRepo::upsert(&state.db, &input)
        .await?
        // The update upserts and asks for the after-image, so a missing
        // document here is a driver contract violation, not a user error.
        .ok_or_else(|| AppError::Internal("upsert returned no document".to_string()))?;

    tracing::info!("Dynamic content updated");

    Ok(Json(DataResponse { data: content }))
}

/// GET /api/v1/get_dynamic_content
///
/// Fetch the content document. 404 until the first successful update has
/// created it.
pub async fn get_dynamic_content(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let content = DynamicContentRepo::get(&state.db).await?;

    match content {
        Some(content) => Ok(Json(DataResponse { data: content })),
        None => Err(AppError::NotFound(
            "dynamic content has not been created yet".to_string(),
        )),
    }
}
