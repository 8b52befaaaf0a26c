//! Handlers for the `/stations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use resman_core::error::CoreError;
use resman_core::types::DbId;
use resman_core::validation::validate_name;
use resman_db::models::station::{CreateStation, Station, UpdateStation};
use resman_db::repositories::StationRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::no_fields_to_update;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Station",
        id,
    })
}

/// POST /stations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStation>,
) -> AppResult<(StatusCode, Json<Station>)> {
    validate_name(&input.name)?;
    let station = StationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        station_id = station.id,
        project_id = station.project_id,
        "Station created"
    );
    Ok((StatusCode::CREATED, Json(station)))
}

/// GET /stations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Station>>> {
    let stations = StationRepo::list(&state.pool).await?;
    Ok(Json(stations))
}

/// GET /stations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Station>> {
    let station = StationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(station))
}

/// PUT /stations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStation>,
) -> AppResult<Json<Station>> {
    if input.is_empty() {
        return Err(no_fields_to_update());
    }
    if let Some(name) = &input.name {
        validate_name(name)?;
    }

    let station = StationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(station_id = id, "Station updated");
    Ok(Json(station))
}

/// DELETE /stations/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if StationRepo::delete(&state.pool, id).await? {
        tracing::info!(station_id = id, "Station deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
