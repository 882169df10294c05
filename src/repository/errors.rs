use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures surfaced by repository operations.
///
/// Storage-layer failures are wrapped as-is and never retried or translated;
/// a lookup miss is not an error (operations return `Option` instead).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("validation error: {0}")]
    Validation(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<TypeConstraintError> for RepositoryError {
    fn from(err: TypeConstraintError) -> Self {
        RepositoryError::Validation(err.to_string())
    }
}
