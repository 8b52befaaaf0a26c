//! Handlers for the `/metrics` resource (rows of `project_metrics`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use resman_core::error::CoreError;
use resman_core::types::DbId;
use resman_core::validation::validate_hours;
use resman_db::models::metrics::{CreateProjectMetrics, ProjectMetrics, UpdateProjectMetrics};
use resman_db::repositories::MetricsRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::no_fields_to_update;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ProjectMetrics",
        id,
    })
}

/// POST /metrics
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectMetrics>,
) -> AppResult<(StatusCode, Json<ProjectMetrics>)> {
    validate_hours("planned_hours", input.planned_hours)?;
    if let Some(actual) = input.actual_hours_logged {
        validate_hours("actual_hours_logged", actual)?;
    }

    let metrics = MetricsRepo::create(&state.pool, &input).await?;
    tracing::info!(
        metrics_id = metrics.id,
        project_id = metrics.project_id,
        "Project metrics created"
    );
    Ok((StatusCode::CREATED, Json(metrics)))
}

/// GET /metrics
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectMetrics>>> {
    let metrics = MetricsRepo::list(&state.pool).await?;
    Ok(Json(metrics))
}

/// GET /metrics/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectMetrics>> {
    let metrics = MetricsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(metrics))
}

/// PUT /metrics/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProjectMetrics>,
) -> AppResult<Json<ProjectMetrics>> {
    if input.is_empty() {
        return Err(no_fields_to_update());
    }
    if let Some(planned) = input.planned_hours {
        validate_hours("planned_hours", planned)?;
    }
    if let Some(actual) = input.actual_hours_logged {
        validate_hours("actual_hours_logged", actual)?;
    }

    let metrics = MetricsRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(metrics_id = id, "Project metrics updated");
    Ok(Json(metrics))
}

/// DELETE /metrics/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if MetricsRepo::delete(&state.pool, id).await? {
        tracing::info!(metrics_id = id, "Project metrics deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
