//! Route definitions for the `/hours` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::hours;
use crate::state::AppState;

/// Routes mounted at `/hours`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// POST   /bulk    -> bulk_create (?assignment_id=&start_date=&end_date=&hours_per_day=)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hours::list).post(hours::create))
        .route("/bulk", post(hours::bulk_create))
        .route(
            "/{id}",
            get(hours::get_by_id)
                .put(hours::update)
                .delete(hours::delete),
        )
}
