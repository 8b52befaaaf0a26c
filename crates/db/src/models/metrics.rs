//! Project metrics model and DTOs.

use resman_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `project_metrics` table.
///
/// `actual_hours_logged` is a cached sum that only bulk logging refreshes;
/// `estimated_completion_date` is only refreshed by a project date shift.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMetrics {
    pub id: DbId,
    pub project_id: DbId,
    pub planned_hours: f64,
    pub estimated_completion_date: Option<Date>,
    pub actual_hours_logged: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectMetrics {
    pub project_id: DbId,
    pub planned_hours: f64,
    pub estimated_completion_date: Option<Date>,
    pub actual_hours_logged: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectMetrics {
    pub planned_hours: Option<f64>,
    pub estimated_completion_date: Option<Date>,
    pub actual_hours_logged: Option<f64>,
}

impl UpdateProjectMetrics {
    pub fn is_empty(&self) -> bool {
        self.planned_hours.is_none()
            && self.estimated_completion_date.is_none()
            && self.actual_hours_logged.is_none()
    }
}

/// Query parameter for `PATCH /projects/{id}/shift`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftParams {
    pub days: i32,
}

/// Response body for `PATCH /projects/{id}/shift`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftOutcome {
    pub new_start: Option<Date>,
    pub new_end: Option<Date>,
    pub new_estimated_completion: Date,
}
