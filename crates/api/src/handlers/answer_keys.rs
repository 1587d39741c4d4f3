//! Handlers for answer keys.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jobport_core::error::CoreError;
use jobport_db::models::answer_key::{AnswerKeyListQuery, CreateAnswerKey, UpdateAnswerKey};
use jobport_db::repositories::AnswerKeyRepo;
use validator::Validate;

use super::parse_object_id;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/answer-keys
pub async fn create_answer_key(
    State(state): State<AppState>,
    Json(input): Json<CreateAnswerKey>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let job_id = parse_object_id(&input.job_id)?;

    let key = AnswerKeyRepo::create(&state.db, job_id, &input).await?;

    tracing::info!(%job_id, title = %key.title, "Answer key created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: key })))
}

/// GET /api/v1/answer-keys
pub async fn list_answer_keys(
    State(state): State<AppState>,
    Query(query): Query<AnswerKeyListQuery>,
) -> AppResult<impl IntoResponse> {
    let job_id = query
        .job_id
        .as_deref()
        .map(parse_object_id)
        .transpose()?;

    let keys = AnswerKeyRepo::list(&state.db, job_id, &query).await?;
    Ok(Json(DataResponse { data: keys }))
}

/// GET /api/v1/answer-keys/{id}
pub async fn get_answer_key(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let key = AnswerKeyRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "AnswerKey",
            id,
        })?;

    Ok(Json(DataResponse { data: key }))
}

/// PUT /api/v1/answer-keys/{id}
pub async fn update_answer_key(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateAnswerKey>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let key = AnswerKeyRepo::update(&state.db, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "AnswerKey",
            id,
        })?;

    Ok(Json(DataResponse { data: key }))
}

/// DELETE /api/v1/answer-keys/{id}
pub async fn delete_answer_key(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    if !AnswerKeyRepo::delete(&state.db, id).await? {
        return Err(CoreError::NotFound {
            entity: "AnswerKey",
            id,
        }
        .into());
    }

    Ok(StatusCode::NO_CONTENT)
}
