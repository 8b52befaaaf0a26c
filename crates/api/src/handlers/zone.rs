//! Handlers for the `/zones` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use resman_core::error::CoreError;
use resman_core::types::DbId;
use resman_core::validation::validate_name;
use resman_db::models::zone::{CreateZone, UpdateZone, Zone};
use resman_db::repositories::ZoneRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::no_fields_to_update;
use crate::state::AppState;

/// POST /zones
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateZone>,
) -> AppResult<(StatusCode, Json<Zone>)> {
    validate_name(&input.name)?;
    let zone = ZoneRepo::create(&state.pool, &input).await?;
    tracing::info!(zone_id = zone.id, "Zone created");
    Ok((StatusCode::CREATED, Json(zone)))
}

/// GET /zones
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Zone>>> {
    let zones = ZoneRepo::list(&state.pool).await?;
    Ok(Json(zones))
}

/// GET /zones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Zone>> {
    let zone = ZoneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Zone", id }))?;
    Ok(Json(zone))
}

/// PUT /zones/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateZone>,
) -> AppResult<Json<Zone>> {
    if input.is_empty() {
        return Err(no_fields_to_update());
    }
    if let Some(name) = &input.name {
        validate_name(name)?;
    }

    let zone = ZoneRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Zone", id }))?;
    tracing::info!(zone_id = id, "Zone updated");
    Ok(Json(zone))
}

/// DELETE /zones/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ZoneRepo::delete(&state.pool, id).await? {
        tracing::info!(zone_id = id, "Zone deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Zone", id }))
    }
}
