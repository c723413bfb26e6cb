//! Page selection shared by the paginated place listings.

use crate::domain::types::TypeConstraintError;

/// Page size used when a caller does not ask for one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// One-based page number together with the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Validates raw page arguments. Both must be at least one.
    pub fn new(page: i64, per_page: i64) -> Result<Self, TypeConstraintError> {
        if page < 1 {
            return Err(TypeConstraintError::NonPositiveNumber("page number"));
        }
        if per_page < 1 {
            return Err(TypeConstraintError::NonPositiveNumber("page size"));
        }
        let page =
            usize::try_from(page).map_err(|_| TypeConstraintError::NonPositiveNumber("page number"))?;
        let per_page = usize::try_from(per_page)
            .map_err(|_| TypeConstraintError::NonPositiveNumber("page size"))?;
        Ok(Self { page, per_page })
    }

    /// Number of records to skip.
    pub fn offset(&self) -> i64 {
        let offset = (self.page - 1).saturating_mul(self.per_page);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }

    /// Maximum number of records to return.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.per_page).unwrap_or(i64::MAX)
    }
}
