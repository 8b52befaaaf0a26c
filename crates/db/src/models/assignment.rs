//! Assignment (`employee_project_zone`) model and DTOs.
//!
//! An assignment places one employee at a project/zone/station combination.
//! Logged hours hang off assignments, not employees.

use resman_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub employee_id: DbId,
    pub project_id: DbId,
    pub zone_id: DbId,
    pub station_id: DbId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignment {
    pub employee_id: DbId,
    pub project_id: DbId,
    pub zone_id: DbId,
    pub station_id: DbId,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAssignment {
    pub employee_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub zone_id: Option<DbId>,
    pub station_id: Option<DbId>,
}

impl UpdateAssignment {
    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none()
            && self.project_id.is_none()
            && self.zone_id.is_none()
            && self.station_id.is_none()
    }
}
