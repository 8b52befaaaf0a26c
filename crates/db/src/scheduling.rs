//! Business-day aware operations spanning several tables.
//!
//! Both operations run in one transaction. Any error drops the transaction
//! before commit, which rolls back every statement already executed.

use chrono::Days;
use resman_core::business_days::{business_days_between, estimate_completion};
use resman_core::error::CoreError;
use resman_core::phase::Phase;
use resman_core::types::{Date, DbId};
use resman_core::validation::validate_bulk_span;
use sqlx::PgPool;

use crate::models::hours::{BulkLogHours, BulkLogOutcome};
use crate::models::metrics::ShiftOutcome;
use crate::repositories::{AssignmentRepo, HoursRepo, MetricsRepo, ProjectRepo};

/// Failure of a scheduling operation: either a domain condition
/// (missing row, unusable input) or a database error.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Entity label used when a project has no metrics row.
const METRICS_FOR_PROJECT: &str = "ProjectMetrics for project";

/// Log `hours_per_day` on every business day of `[start_date, end_date]`.
///
/// Each inserted row carries [`Phase::BULK_PLACEHOLDER`]. Afterwards the
/// project's `actual_hours_logged` is recomputed across all of its
/// assignments, not only the one that was just logged.
pub async fn bulk_log_hours(
    pool: &PgPool,
    input: &BulkLogHours,
) -> Result<BulkLogOutcome, ScheduleError> {
    validate_bulk_span(input.start_date, input.end_date)?;
    let dates = business_days_between(input.start_date, input.end_date);

    let mut tx = pool.begin().await?;

    let project_id = AssignmentRepo::project_id_of(&mut tx, input.assignment_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Assignment",
            id: input.assignment_id,
        })?;

    let inserted = HoursRepo::insert_many(
        &mut tx,
        input.assignment_id,
        &dates,
        Phase::BULK_PLACEHOLDER,
        input.hours_per_day,
    )
    .await?;

    let touched = MetricsRepo::recompute_actual_hours(&mut tx, project_id).await?;
    if touched == 0 {
        return Err(CoreError::NotFound {
            entity: METRICS_FOR_PROJECT,
            id: project_id,
        }
        .into());
    }

    tx.commit().await?;

    tracing::info!(
        assignment_id = input.assignment_id,
        project_id,
        inserted,
        "Bulk hours logged"
    );

    Ok(BulkLogOutcome {
        logged_days: dates.len(),
        hours_per_day: input.hours_per_day,
    })
}

/// Shift a project's window and its logged hours by `days`, then
/// re-estimate completion from the new start date.
///
/// Only hours dated inside the *original* `[start_date, end_date]` move.
/// A project with an open-ended window has no hours moved.
pub async fn shift_project(
    pool: &PgPool,
    project_id: DbId,
    days: i32,
) -> Result<ShiftOutcome, ScheduleError> {
    let mut tx = pool.begin().await?;

    let (orig_start, orig_end) = ProjectRepo::window_for_update(&mut tx, project_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })?;

    for date in [orig_start, orig_end].into_iter().flatten() {
        if shift_date(date, days).is_none() {
            return Err(CoreError::Validation(format!(
                "Shifting project {project_id} by {days} days leaves the supported date range"
            ))
            .into());
        }
    }

    let (new_start, new_end) = ProjectRepo::shift_window(&mut tx, project_id, days).await?;

    let moved = match (orig_start, orig_end) {
        (Some(from), Some(to)) => {
            HoursRepo::shift_project_window(&mut tx, project_id, from, to, days).await?
        }
        _ => 0,
    };

    let (metrics_id, planned_hours) = MetricsRepo::planned_hours_for_project(&mut tx, project_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: METRICS_FOR_PROJECT,
            id: project_id,
        })?;

    let start = new_start.ok_or_else(|| {
        CoreError::Validation(format!(
            "Project {project_id} has no start_date to estimate completion from"
        ))
    })?;
    let estimate = estimate_completion(start, planned_hours).ok_or_else(|| {
        CoreError::Validation(format!(
            "Estimated completion for project {project_id} is out of range"
        ))
    })?;

    MetricsRepo::set_estimated_completion(&mut tx, metrics_id, estimate).await?;

    tx.commit().await?;

    tracing::info!(project_id, days, moved, %estimate, "Project dates shifted");

    Ok(ShiftOutcome {
        new_start,
        new_end,
        new_estimated_completion: estimate,
    })
}

/// `date` moved by a signed number of calendar days, if representable.
fn shift_date(date: Date, days: i32) -> Option<Date> {
    let magnitude = Days::new(u64::from(days.unsigned_abs()));
    if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}
