//! Input validation rules applied by handlers before touching the database.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Shortest accepted employee first name.
pub const FIRSTNAME_MIN_LEN: usize = 3;
/// Shortest accepted employee last name.
pub const LASTNAME_MIN_LEN: usize = 2;
/// Upper bound for every `VARCHAR(255)` text column.
pub const MAX_TEXT_LEN: usize = 255;
/// Longest calendar span, in days, a single bulk logging request may cover.
pub const MAX_BULK_SPAN_DAYS: i64 = 366;

/// Check that `value` is between `min` and `max` characters long.
pub fn validate_text_length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len < min {
        return Err(CoreError::Validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

pub fn validate_firstname(value: &str) -> Result<(), CoreError> {
    validate_text_length("firstname", value, FIRSTNAME_MIN_LEN, MAX_TEXT_LEN)
}

pub fn validate_lastname(value: &str) -> Result<(), CoreError> {
    validate_text_length("lastname", value, LASTNAME_MIN_LEN, MAX_TEXT_LEN)
}

/// Names of zones, projects and stations: non-blank, at most 255 chars.
pub fn validate_name(value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".into()));
    }
    validate_text_length("name", value, 1, MAX_TEXT_LEN)
}

/// Hour quantities (worked or planned) must be finite and non-negative.
pub fn validate_hours(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

/// Per-day amount for bulk logging must be strictly positive.
pub fn validate_hours_per_day(value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Validation(
            "hours_per_day must be greater than zero".into(),
        ));
    }
    Ok(())
}

/// Bulk ranges are capped at [`MAX_BULK_SPAN_DAYS`]. A reversed range is
/// accepted and simply logs nothing.
pub fn validate_bulk_span(start: NaiveDate, end: NaiveDate) -> Result<(), CoreError> {
    let span = (end - start).num_days();
    if span >= MAX_BULK_SPAN_DAYS {
        return Err(CoreError::Validation(format!(
            "bulk range {start}..{end} spans more than {MAX_BULK_SPAN_DAYS} days"
        )));
    }
    Ok(())
}

/// A project window is valid when it is open on either side or ordered.
pub fn validate_date_window(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), CoreError> {
    match (start, end) {
        (Some(s), Some(e)) if e < s => Err(CoreError::Validation(format!(
            "end_date {e} precedes start_date {s}"
        ))),
        _ => Ok(()),
    }
}
