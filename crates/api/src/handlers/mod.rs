pub mod assignment;
pub mod employee;
pub mod export;
pub mod hours;
pub mod metrics;
pub mod project;
pub mod station;
pub mod zone;

use crate::error::AppError;

/// Error returned when an update body carries no fields at all.
pub(crate) fn no_fields_to_update() -> AppError {
    AppError::BadRequest("No fields to update".into())
}
