//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use resman_core::error::CoreError;
use resman_core::types::DbId;
use resman_core::validation::{validate_date_window, validate_name};
use resman_db::models::metrics::{ShiftOutcome, ShiftParams};
use resman_db::models::project::{CreateProject, Project, UpdateProject};
use resman_db::repositories::ProjectRepo;
use resman_db::scheduling;

use crate::error::{AppError, AppResult};
use crate::handlers::no_fields_to_update;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_name(&input.name)?;
    validate_date_window(input.start_date, input.end_date)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    tracing::debug!(count = projects.len(), "Listed projects");
    Ok(Json(projects))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PUT /projects/{id}
///
/// The date window is checked after merging the patch onto the stored row,
/// so moving only one end still cannot invert the window.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    if input.is_empty() {
        return Err(no_fields_to_update());
    }
    if let Some(name) = &input.name {
        validate_name(name)?;
    }

    let existing = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    validate_date_window(
        input.start_date.or(existing.start_date),
        input.end_date.or(existing.end_date),
    )?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// PATCH /projects/{id}/shift?days=
///
/// Moves the project window and its hours, then re-estimates completion.
pub async fn shift(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ShiftParams>,
) -> AppResult<Json<ShiftOutcome>> {
    let outcome = scheduling::shift_project(&state.pool, id, params.days).await?;
    Ok(Json(outcome))
}
