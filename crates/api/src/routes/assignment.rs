//! Route definitions for the `/assignments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::assignment;
use crate::state::AppState;

/// Routes mounted at `/assignments`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assignment::list).post(assignment::create))
        .route(
            "/{id}",
            get(assignment::get_by_id)
                .put(assignment::update)
                .delete(assignment::delete),
        )
}
