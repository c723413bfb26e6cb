use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// A required field is missing or malformed, or a batch is empty.
    #[error("{0}")]
    Validation(String),
    /// Pagination arguments are out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
