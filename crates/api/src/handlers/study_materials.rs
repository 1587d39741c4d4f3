//! Handlers for study materials.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jobport_core::error::CoreError;
use jobport_db::models::study_material::{
    CreateStudyMaterial, StudyMaterialListQuery, UpdateStudyMaterial,
};
use jobport_db::repositories::StudyMaterialRepo;
use validator::Validate;

use super::parse_object_id;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/study-materials
pub async fn create_study_material(
    State(state): State<AppState>,
    Json(input): Json<CreateStudyMaterial>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let job_id = parse_object_id(&input.job_id)?;

    let material = StudyMaterialRepo::create(&state.db, job_id, &input).await?;

    tracing::info!(%job_id, title = %material.title, "Study material created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: material })))
}

/// GET /api/v1/study-materials
pub async fn list_study_materials(
    State(state): State<AppState>,
    Query(query): Query<StudyMaterialListQuery>,
) -> AppResult<impl IntoResponse> {
    let job_id = query
        .job_id
        .as_deref()
        .map(parse_object_id)
        .transpose()?;

    let materials = StudyMaterialRepo::list(&state.db, job_id, &query).await?;
    Ok(Json(DataResponse { data: materials }))
}

/// GET /api/v1/study-materials/{id}
pub async fn get_study_material(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let material = StudyMaterialRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "StudyMaterial",
            id,
        })?;

    Ok(Json(DataResponse { data: material }))
}

/// PUT /api/v1/study-materials/{id}
pub async fn update_study_material(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateStudyMaterial>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let material = StudyMaterialRepo::update(&state.db, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "StudyMaterial",
            id,
        })?;

    Ok(Json(DataResponse { data: material }))
}

/// DELETE /api/v1/study-materials/{id}
pub async fn delete_study_material(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    if !StudyMaterialRepo::delete(&state.db, id).await? {
        return Err(CoreError::NotFound {
            entity: "StudyMaterial",
            id,
        }
        .into());
    }

    Ok(StatusCode::NO_CONTENT)
}
