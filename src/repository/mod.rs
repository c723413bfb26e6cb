use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::place::{NewPlace, Place};
use crate::domain::review::{NewReview, Review};
use crate::domain::types::{CategoryId, PlaceId, ReviewId};
use crate::pagination::Pagination;

pub mod category;
pub mod errors;
pub mod place;
pub mod review;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing or searching places.
#[derive(Debug, Clone, Default)]
pub struct PlaceListQuery {
    /// Exact match on the referenced category.
    pub category_id: Option<CategoryId>,
    /// Case-insensitive substring of the place name.
    pub name: Option<String>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl PlaceListQuery {
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

/// Query parameters used when listing reviews.
#[derive(Debug, Clone, Default)]
pub struct ReviewListQuery {
    /// Restrict to reviews of a single place.
    pub place_id: Option<PlaceId>,
    /// Order by creation time, newest first.
    pub newest_first: bool,
}

impl ReviewListQuery {
    pub fn place(mut self, place_id: PlaceId) -> Self {
        self.place_id = Some(place_id);
        self
    }
    pub fn newest_first(mut self) -> Self {
        self.newest_first = true;
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories in storage order.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;
    /// Retrieve every category whose id is in `ids`. Unknown ids are skipped.
    fn list_categories_by_ids(&self, ids: &[CategoryId]) -> RepositoryResult<Vec<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return it with its generated id.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Persist a batch of categories as a unit.
    fn create_categories(&self, categories: &[NewCategory]) -> RepositoryResult<Vec<Category>>;
    /// Delete a category, returning the number of removed records.
    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for place entities.
pub trait PlaceReader {
    /// List places matching the supplied query parameters in storage order.
    fn list_places(&self, query: PlaceListQuery) -> RepositoryResult<Vec<Place>>;
    /// Retrieve a place by its identifier.
    fn get_place_by_id(&self, id: &PlaceId) -> RepositoryResult<Option<Place>>;
    /// Return a page of places ordered by their mean review rating, highest
    /// first. Places without reviews come last.
    fn list_ranked_places(&self, pagination: Pagination) -> RepositoryResult<Vec<Place>>;
}

/// Write operations for place entities.
pub trait PlaceWriter {
    /// Persist a new place and return it with its generated id.
    fn create_place(&self, place: &NewPlace) -> RepositoryResult<Place>;
    /// Persist a batch of places as a unit.
    fn create_places(&self, places: &[NewPlace]) -> RepositoryResult<Vec<Place>>;
    /// Replace every stored field of a place, returning the number of
    /// affected records.
    fn replace_place(&self, id: &PlaceId, place: &NewPlace) -> RepositoryResult<usize>;
    /// Delete a place, returning the number of removed records.
    fn delete_place(&self, id: &PlaceId) -> RepositoryResult<usize>;
}

/// Read-only operations for review entities.
pub trait ReviewReader {
    /// List reviews using the supplied query options.
    fn list_reviews(&self, query: ReviewListQuery) -> RepositoryResult<Vec<Review>>;
    /// Retrieve a review by its identifier.
    fn get_review_by_id(&self, id: &ReviewId) -> RepositoryResult<Option<Review>>;
}

/// Write operations for review entities.
pub trait ReviewWriter {
    /// Persist a new review and return it with its generated id.
    fn create_review(&self, review: &NewReview) -> RepositoryResult<Review>;
    /// Persist a batch of reviews as a unit.
    fn create_reviews(&self, reviews: &[NewReview]) -> RepositoryResult<Vec<Review>>;
    /// Replace every stored field of a review, returning the number of
    /// affected records.
    fn replace_review(&self, id: &ReviewId, review: &NewReview) -> RepositoryResult<usize>;
    /// Delete a review, returning the number of removed records.
    fn delete_review(&self, id: &ReviewId) -> RepositoryResult<usize>;
}
