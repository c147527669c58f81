//! Store error classification.
//!
//! Repositories surface two distinguishable failure signals on top of the
//! raw driver error: a missing target row and a write rejected by a
//! referential-integrity constraint. The service layer translates these
//! into domain errors; everything else propagates unclassified.

/// PostgreSQL SQLSTATE for a foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Error type surfaced by repository implementations.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The targeted row does not exist.
    #[error("row not found")]
    RowNotFound,

    /// A write was rejected by a foreign key constraint.
    #[error("integrity violation on constraint {0}")]
    IntegrityViolation(String),

    /// Any other database failure.
    #[error(transparent)]
    Other(sqlx::Error),
}

/// Convenience type alias for repository return values.
pub type DbResult<T> = Result<T, DbError>;

impl From<sqlx::Error> for DbError {
    /// Classify a sqlx error into the store's failure signals.
    ///
    /// - `RowNotFound` maps to [`DbError::RowNotFound`].
    /// - Foreign key violations (SQLSTATE 23503) map to
    ///   [`DbError::IntegrityViolation`] carrying the constraint name.
    /// - Everything else passes through as [`DbError::Other`].
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::RowNotFound,
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
            {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                DbError::IntegrityViolation(constraint)
            }
            other => DbError::Other(other),
        }
    }
}
