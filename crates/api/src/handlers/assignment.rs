//! Handlers for the `/assignments` resource (rows of `employee_project_zone`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use resman_core::error::CoreError;
use resman_core::types::DbId;
use resman_db::models::assignment::{Assignment, CreateAssignment, UpdateAssignment};
use resman_db::repositories::AssignmentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::no_fields_to_update;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Assignment",
        id,
    })
}

/// POST /assignments
///
/// Dangling references are rejected by foreign keys and surface as 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAssignment>,
) -> AppResult<(StatusCode, Json<Assignment>)> {
    let assignment = AssignmentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        assignment_id = assignment.id,
        employee_id = assignment.employee_id,
        project_id = assignment.project_id,
        "Assignment created"
    );
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// GET /assignments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Assignment>>> {
    let assignments = AssignmentRepo::list(&state.pool).await?;
    tracing::debug!(count = assignments.len(), "Listed assignments");
    Ok(Json(assignments))
}

/// GET /assignments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Assignment>> {
    let assignment = AssignmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(assignment))
}

/// PUT /assignments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAssignment>,
) -> AppResult<Json<Assignment>> {
    if input.is_empty() {
        return Err(no_fields_to_update());
    }
    let assignment = AssignmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(assignment_id = id, "Assignment updated");
    Ok(Json(assignment))
}

/// DELETE /assignments/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if AssignmentRepo::delete(&state.pool, id).await? {
        tracing::info!(assignment_id = id, "Assignment deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
