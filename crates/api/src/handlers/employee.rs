//! Handlers for the `/employees` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use resman_core::error::CoreError;
use resman_core::types::DbId;
use resman_core::validation::{validate_firstname, validate_lastname};
use resman_db::models::employee::{
    group_search_rows, CreateEmployee, Employee, EmployeeSearch, EmployeeWithAssignments,
    UpdateEmployee,
};
use resman_db::repositories::EmployeeRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::no_fields_to_update;
use crate::state::AppState;

/// POST /employees
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    validate_firstname(&input.firstname)?;
    validate_lastname(&input.lastname)?;

    let employee = EmployeeRepo::create(&state.pool, &input).await?;
    tracing::info!(employee_id = employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = EmployeeRepo::list(&state.pool).await?;
    tracing::debug!(count = employees.len(), "Listed employees");
    Ok(Json(employees))
}

/// GET /employees/search?firstname=&lastname=
///
/// Blank parameters are treated as absent.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<EmployeeSearch>,
) -> AppResult<Json<Vec<EmployeeWithAssignments>>> {
    let filter = EmployeeSearch {
        firstname: params.firstname.filter(|s| !s.trim().is_empty()),
        lastname: params.lastname.filter(|s| !s.trim().is_empty()),
    };
    let rows = EmployeeRepo::search(&state.pool, &filter).await?;
    Ok(Json(group_search_rows(rows)))
}

/// GET /employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;
    Ok(Json(employee))
}

/// PUT /employees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    if input.is_empty() {
        return Err(no_fields_to_update());
    }
    if let Some(firstname) = &input.firstname {
        validate_firstname(firstname)?;
    }
    if let Some(lastname) = &input.lastname {
        validate_lastname(lastname)?;
    }

    let employee = EmployeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;
    tracing::info!(employee_id = id, "Employee updated");
    Ok(Json(employee))
}

/// DELETE /employees/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = EmployeeRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(employee_id = id, "Employee deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))
    }
}
