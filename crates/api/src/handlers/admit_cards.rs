//! Handlers for admit cards.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jobport_core::error::CoreError;
use jobport_db::models::admit_card::{AdmitCardListQuery, CreateAdmitCard, UpdateAdmitCard};
use jobport_db::repositories::AdmitCardRepo;
use validator::Validate;

use super::parse_object_id;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admit-cards
pub async fn create_admit_card(
    State(state): State<AppState>,
    Json(input): Json<CreateAdmitCard>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let job_id = parse_object_id(&input.job_id)?;

    let card = AdmitCardRepo::create(&state.db, job_id, &input).await?;

    tracing::info!(%job_id, title = %card.title, "Admit card created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: card })))
}

/// GET /api/v1/admit-cards
///
/// List admit cards, newest first. Supports `job_id`, `status`, `limit`,
/// and `offset` query parameters.
pub async fn list_admit_cards(
    State(state): State<AppState>,
    Query(query): Query<AdmitCardListQuery>,
) -> AppResult<impl IntoResponse> {
    let job_id = query
        .job_id
        .as_deref()
        .map(parse_object_id)
        .transpose()?;

    let cards = AdmitCardRepo::list(&state.db, job_id, &query).await?;
    Ok(Json(DataResponse { data: cards }))
}

/// GET /api/v1/admit-cards/{id}
pub async fn get_admit_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let card = AdmitCardRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "AdmitCard",
            id,
        })?;

    Ok(Json(DataResponse { data: card }))
}

/// PUT /api/v1/admit-cards/{id}
///
/// Partial update: only fields present in the body are applied.
pub async fn update_admit_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateAdmitCard>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let card = AdmitCardRepo::update(&state.db, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "AdmitCard",
            id,
        })?;

    Ok(Json(DataResponse { data: card }))
}

/// DELETE /api/v1/admit-cards/{id}
pub async fn delete_admit_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    if !AdmitCardRepo::delete(&state.db, id).await? {
        return Err(CoreError::NotFound {
            entity: "AdmitCard",
            id,
        }
        .into());
    }

    Ok(StatusCode::NO_CONTENT)
}
