use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Errors surfaced by the service layer to its callers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("resource not found")]
    NotFound,

    #[error("invalid input: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
