//! Handlers for job postings.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jobport_core::error::CoreError;
use jobport_db::models::job::{CreateJob, JobListQuery, UpdateJob};
use jobport_db::repositories::JobRepo;
use validator::Validate;

use super::parse_object_id;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/jobs
///
/// Create a job posting.
pub async fn create_job(
    State(state): State<AppState>,
    Json(input): Json<CreateJob>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let job = JobRepo::create(&state.db, &input).await?;

    tracing::info!(title = %job.title, "Job created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: job })))
}

/// GET /api/v1/jobs
///
/// List jobs, newest first. Supports `status`, `limit`, and `offset`
/// query parameters.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> AppResult<impl IntoResponse> {
    let jobs = JobRepo::list(&state.db, &query).await?;
    Ok(Json(DataResponse { data: jobs }))
}

/// GET /api/v1/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let job = JobRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Job", id })?;

    Ok(Json(DataResponse { data: job }))
}

/// PUT /api/v1/jobs/{id}
///
/// Partial update: only fields present in the body are applied.
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateJob>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let job = JobRepo::update(&state.db, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Job", id })?;

    tracing::info!(%id, "Job updated");

    Ok(Json(DataResponse { data: job }))
}

/// DELETE /api/v1/jobs/{id}
///
/// Hard delete. Attached records (admit cards, answer keys, results,
/// study materials) are left in place; references are by convention.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    if !JobRepo::delete(&state.db, id).await? {
        return Err(CoreError::NotFound { entity: "Job", id }.into());
    }

    tracing::info!(%id, "Job deleted");

    Ok(StatusCode::NO_CONTENT)
}
