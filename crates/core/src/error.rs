use crate::types::DbId;

/// Domain-level error taxonomy shared by every layer.
///
/// `Validation` covers bad requests (date ranges, illegal status
/// transitions, unrecognized enumeration tokens); `Unauthorized` covers
/// ownership and role violations. Validation and authorization failures
/// are always raised before any mutation is attempted.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
