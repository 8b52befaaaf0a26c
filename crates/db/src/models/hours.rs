//! Logged-hours model and DTOs.

use resman_core::phase::Phase;
use resman_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `hours_logged` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HoursLogged {
    pub id: DbId,
    pub employee_project_zone_id: DbId,
    pub date: Date,
    #[sqlx(try_from = "String")]
    pub phase: Phase,
    pub hours_worked: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHoursLogged {
    pub employee_project_zone_id: DbId,
    pub date: Date,
    pub phase: Phase,
    pub hours_worked: f64,
}

/// DTO for correcting an existing entry. The owning assignment is fixed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHoursLogged {
    pub date: Option<Date>,
    pub phase: Option<Phase>,
    pub hours_worked: Option<f64>,
}

impl UpdateHoursLogged {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.phase.is_none() && self.hours_worked.is_none()
    }
}

/// Query parameters for `POST /hours/bulk`.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkLogHours {
    pub assignment_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    pub hours_per_day: f64,
}

/// Response body for `POST /hours/bulk`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkLogOutcome {
    pub logged_days: usize,
    pub hours_per_day: f64,
}
