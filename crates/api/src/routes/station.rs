//! Route definitions for the `/stations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::station;
use crate::state::AppState;

/// Routes mounted at `/stations`.
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
        .route("/", get(station::list).post(station::create))
        .route(
            "/{id}",
            get(station::get_by_id)
                .put(station::update)
                .delete(station::delete),
        )
}
