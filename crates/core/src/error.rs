use crate::types::DbId;

/// Closed error taxonomy shared by every layer.
///
/// The HTTP boundary maps each variant to exactly one status code, so new
/// failure kinds should be folded into an existing variant where possible.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
