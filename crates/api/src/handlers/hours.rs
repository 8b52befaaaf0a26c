//! Handlers for the `/hours` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use resman_core::error::CoreError;
use resman_core::types::DbId;
use resman_core::validation::{validate_hours, validate_hours_per_day};
use resman_db::models::hours::{
    BulkLogHours, BulkLogOutcome, CreateHoursLogged, HoursLogged, UpdateHoursLogged,
};
use resman_db::repositories::HoursRepo;
use resman_db::scheduling;

use crate::error::{AppError, AppResult};
use crate::handlers::no_fields_to_update;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "HoursLogged",
        id,
    })
}

/// POST /hours
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateHoursLogged>,
) -> AppResult<(StatusCode, Json<HoursLogged>)> {
    validate_hours("hours_worked", input.hours_worked)?;

    let entry = HoursRepo::create(&state.pool, &input).await?;
    tracing::info!(
        hours_id = entry.id,
        assignment_id = entry.employee_project_zone_id,
        phase = %entry.phase,
        "Hours logged"
    );
    Ok((StatusCode::CREATED, Json(entry)))
}

/// POST /hours/bulk?assignment_id=&start_date=&end_date=&hours_per_day=
pub async fn bulk_create(
    State(state): State<AppState>,
    Query(params): Query<BulkLogHours>,
) -> AppResult<Json<BulkLogOutcome>> {
    validate_hours_per_day(params.hours_per_day)?;
    let outcome = scheduling::bulk_log_hours(&state.pool, &params).await?;
    Ok(Json(outcome))
}

/// GET /hours
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<HoursLogged>>> {
    let entries = HoursRepo::list(&state.pool).await?;
    tracing::debug!(count = entries.len(), "Listed hours");
    Ok(Json(entries))
}

/// GET /hours/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HoursLogged>> {
    let entry = HoursRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(entry))
}

/// PUT /hours/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHoursLogged>,
) -> AppResult<Json<HoursLogged>> {
    if input.is_empty() {
        return Err(no_fields_to_update());
    }
    if let Some(hours) = input.hours_worked {
        validate_hours("hours_worked", hours)?;
    }

    let entry = HoursRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(hours_id = id, "Hours entry updated");
    Ok(Json(entry))
}

/// DELETE /hours/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if HoursRepo::delete(&state.pool, id).await? {
        tracing::info!(hours_id = id, "Hours entry deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
