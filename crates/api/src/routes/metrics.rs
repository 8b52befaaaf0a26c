//! Route definitions for the `/metrics` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::metrics;
use crate::state::AppState;

/// Routes mounted at `/metrics`.
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
        .route("/", get(metrics::list).post(metrics::create))
        .route(
            "/{id}",
            get(metrics::get_by_id)
                .put(metrics::update)
                .delete(metrics::delete),
        )
}
