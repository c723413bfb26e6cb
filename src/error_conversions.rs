//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here instead of next to the error definitions.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::domain::types::TypeConstraintError;
    use crate::forms::categories::AddCategoryFormError;
    use crate::forms::places::PlaceFormError;
    use crate::forms::reviews::ReviewFormError;
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::Validation(val.to_string())
        }
    }

    impl From<AddCategoryFormError> for ServiceError {
        fn from(val: AddCategoryFormError) -> Self {
            ServiceError::Validation(val.to_string())
        }
    }

    impl From<PlaceFormError> for ServiceError {
        fn from(val: PlaceFormError) -> Self {
            ServiceError::Validation(val.to_string())
        }
    }

    impl From<ReviewFormError> for ServiceError {
        fn from(val: ReviewFormError) -> Self {
            ServiceError::Validation(val.to_string())
        }
    }
}
