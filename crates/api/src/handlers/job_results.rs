//! Handlers for declared exam results.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jobport_core::error::CoreError;
use jobport_db::models::job_result::{CreateJobResult, JobResultListQuery, UpdateJobResult};
use jobport_db::repositories::JobResultRepo;
use validator::Validate;

use super::parse_object_id;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/results
pub async fn create_result(
    State(state): State<AppState>,
    Json(input): Json<CreateJobResult>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let job_id = parse_object_id(&input.job_id)?;

    let result = JobResultRepo::create(&state.db, job_id, &input).await?;

    tracing::info!(%job_id, title = %result.title, "Result created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: result })))
}

/// GET /api/v1/results
pub async fn list_results(
    State(state): State<AppState>,
    Query(query): Query<JobResultListQuery>,
) -> AppResult<impl IntoResponse> {
    let job_id = query
        .job_id
        .as_deref()
        .map(parse_object_id)
        .transpose()?;

    let results = JobResultRepo::list(&state.db, job_id, &query).await?;
    Ok(Json(DataResponse { data: results }))
}

/// GET /api/v1/results/{id}
pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let result = JobResultRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Result",
            id,
        })?;

    Ok(Json(DataResponse { data: result }))
}

/// PUT /api/v1/results/{id}
pub async fn update_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateJobResult>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let result = JobResultRepo::update(&state.db, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Result",
            id,
        })?;

    Ok(Json(DataResponse { data: result }))
}

/// DELETE /api/v1/results/{id}
pub async fn delete_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    if !JobResultRepo::delete(&state.db, id).await? {
        return Err(CoreError::NotFound {
            entity: "Result",
            id,
        }
        .into());
    }

    Ok(StatusCode::NO_CONTENT)
}
