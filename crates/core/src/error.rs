use crate::types::DbId;

/// Domain error taxonomy.
///
/// `NotFound` maps to 404, `Conflict` to 409, `Validation` to 400.
/// `Unavailable` is the only retryable class: a transient store failure
/// the caller may retry with backoff. The coordinator itself never
/// retries internally.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
