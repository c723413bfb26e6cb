use thiserror::Error;

/// Failures raised by the storage layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A record expected to exist was not found.
    #[error("record not found")]
    NotFound,
    /// Stored data violates a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// No connection could be obtained from the pool.
    #[error("connection error: {0}")]
    ConnectionError(#[from] diesel::r2d2::PoolError),
    /// The database rejected or failed a statement.
    #[error("database error: {0}")]
    DatabaseError(diesel::result::Error),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => RepositoryError::NotFound,
            other => RepositoryError::DatabaseError(other),
        }
    }
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
