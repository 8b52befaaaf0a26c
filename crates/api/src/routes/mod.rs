pub mod assignment;
pub mod employee;
pub mod export;
pub mod health;
pub mod hours;
pub mod metrics;
pub mod project;
pub mod station;
pub mod zone;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /employees                   list, create
/// /employees/search            search by name with assignments
/// /employees/{id}              get, update, delete
///
/// /zones                       list, create
/// /zones/{id}                  get, update, delete
///
/// /projects                    list, create
/// /projects/{id}               get, update, delete
/// /projects/{id}/shift         shift window and hours (PATCH)
///
/// /stations                    list, create
/// /stations/{id}               get, update, delete
///
/// /assignments                 list, create
/// /assignments/{id}            get, update, delete
///
/// /hours                       list, create
/// /hours/bulk                  log a date range (POST)
/// /hours/{id}                  get, update, delete
///
/// /metrics                     list, create
/// /metrics/{id}                get, update, delete
///
/// /export/all                  workbook with the core tables
/// /export/{table_name}         workbook with one table
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/employees", employee::router())
        .nest("/zones", zone::router())
        .nest("/projects", project::router())
        .nest("/stations", station::router())
        .nest("/assignments", assignment::router())
        .nest("/hours", hours::router())
        .nest("/metrics", metrics::router())
        .nest("/export", export::router())
}
