use crate::types::DbId;

/// Domain-level error kinds shared across the service layer.
///
/// Two variants carry the catalog contract: [`CoreError::NotFound`] for
/// lookups that yield no entity, and [`CoreError::Database`] for writes
/// rejected by a referential-integrity constraint. The remaining variants
/// cover input validation and unrecoverable store failures.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Database integrity violation: {0}")]
    Database(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
