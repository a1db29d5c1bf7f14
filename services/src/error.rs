use sea_orm::DbErr;
use thiserror::Error;

/// Failure taxonomy for all service operations.
///
/// Every failure is scoped to the request that caused it; callers map each
/// variant to a distinct client-facing status.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed input, rejected before any write.
    #[error("{0}")]
    Validation(String),

    /// The actor lacks the required role or does not own the target resource.
    #[error("{0}")]
    Forbidden(String),

    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The write would duplicate a uniqueness-constrained pair.
    #[error("{0}")]
    Conflict(String),

    /// Underlying storage failure.
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}
