//! Handlers for the state/city reference data.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jobport_core::error::CoreError;
use jobport_db::models::location::{CreateCity, CreateState, UpdateCity, UpdateState};
use jobport_db::repositories::{CityRepo, StateRepo};
use validator::Validate;

use super::parse_object_id;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// States
// ---------------------------------------------------------------------------

/// POST /api/v1/states
pub async fn create_state(
    State(state): State<AppState>,
    Json(input): Json<CreateState>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let created = StateRepo::create(&state.db, &input).await?;

    tracing::info!(name = %created.name, "State created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/states
pub async fn list_states(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let states = StateRepo::list(&state.db).await?;
    Ok(Json(DataResponse { data: states }))
}

/// GET /api/v1/states/{id}
pub async fn get_state(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let found = StateRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "State", id })?;

    Ok(Json(DataResponse { data: found }))
}

/// PUT /api/v1/states/{id}
pub async fn update_state(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateState>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let updated = StateRepo::update(&state.db, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "State", id })?;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/states/{id}
pub async fn delete_state(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    if !StateRepo::delete(&state.db, id).await? {
        return Err(CoreError::NotFound { entity: "State", id }.into());
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Cities
// ---------------------------------------------------------------------------

/// POST /api/v1/states/{id}/cities
pub async fn create_city(
    State(state): State<AppState>,
    Path(state_id): Path<String>,
    Json(input): Json<CreateCity>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let state_id = parse_object_id(&state_id)?;

    let city = CityRepo::create(&state.db, state_id, &input).await?;

    tracing::info!(%state_id, name = %city.name, "City created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: city })))
}

/// GET /api/v1/states/{id}/cities
pub async fn list_cities(
    State(state): State<AppState>,
    Path(state_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let state_id = parse_object_id(&state_id)?;
    let cities = CityRepo::list_by_state(&state.db, state_id).await?;
    Ok(Json(DataResponse { data: cities }))
}

/// GET /api/v1/cities/{id}
pub async fn get_city(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let city = CityRepo::find_by_id(&state.db, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "City", id })?;

    Ok(Json(DataResponse { data: city }))
}

/// PUT /api/v1/cities/{id}
pub async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCity>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    let city = CityRepo::update(&state.db, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "City", id })?;

    Ok(Json(DataResponse { data: city }))
}

/// DELETE /api/v1/cities/{id}
pub async fn delete_city(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_object_id(&id)?;
    if !CityRepo::delete(&state.db, id).await? {
        return Err(CoreError::NotFound { entity: "City", id }.into());
    }

    Ok(StatusCode::NO_CONTENT)
}
