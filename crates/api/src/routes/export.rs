//! Route definitions for `/export`.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Routes mounted at `/export`. The static `/all` segment wins over the
/// `{table_name}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(export::export_all))
        .route("/{table_name}", get(export::export_table))
}
