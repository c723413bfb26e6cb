use std::cell::{Cell, RefCell};

use crate::domain::category::{Category, NewCategory};
use crate::domain::place::{NewPlace, Place};
use crate::domain::review::{NewReview, Review};
use crate::domain::types::{AverageRating, CategoryId, PlaceId, ReviewId};
use crate::pagination::Pagination;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CategoryReader, CategoryWriter, PlaceListQuery, PlaceReader, PlaceWriter, ReviewListQuery,
    ReviewReader, ReviewWriter,
};

/// Simple in-memory repository used for unit tests.
///
/// Records are kept in insertion order and every trait call is counted so
/// that tests can assert that validation happened before storage was touched.
#[derive(Default)]
pub struct TestRepository {
    categories: RefCell<Vec<Category>>,
    places: RefCell<Vec<Place>>,
    reviews: RefCell<Vec<Review>>,
    next_id: Cell<u64>,
    calls: Cell<usize>,
    fail: bool,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>, places: Vec<Place>, reviews: Vec<Review>) -> Self {
        Self {
            categories: RefCell::new(categories),
            places: RefCell::new(places),
            reviews: RefCell::new(reviews),
            ..Default::default()
        }
    }

    /// A repository whose every call fails like a lost connection.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.borrow().clone()
    }

    pub fn places(&self) -> Vec<Place> {
        self.places.borrow().clone()
    }

    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.borrow().clone()
    }

    fn touch(&self) -> RepositoryResult<()> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(RepositoryError::DatabaseError(
                diesel::result::Error::BrokenTransactionManager,
            ));
        }
        Ok(())
    }

    fn generate_id(&self) -> String {
        let next = self.next_id.get() + 1;
        self.next_id.set(next);
        format!("{next:024x}")
    }

    fn build_category(&self, category: &NewCategory) -> Category {
        Category {
            id: CategoryId::new(self.generate_id()).unwrap(),
            name: category.name.clone(),
        }
    }

    fn build_place(&self, id: PlaceId, place: &NewPlace) -> Place {
        Place {
            id,
            name: place.name.clone(),
            description: place.description.clone(),
            address: place.address.clone(),
            opening_hours: place.opening_hours.clone(),
            category_id: place.category_id.clone(),
            image_url: place.image_url.clone(),
            average_rating: None,
            category: None,
        }
    }

    fn build_review(&self, id: ReviewId, review: &NewReview) -> Review {
        Review {
            id,
            place_id: review.place_id.clone(),
            reviewer_name: review.reviewer_name.clone(),
            review_text: review.review_text.clone(),
            rating: review.rating,
            created_at: review.created_at,
        }
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.touch()?;
        Ok(self.categories())
    }

    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        self.touch()?;
        Ok(self
            .categories
            .borrow()
            .iter()
            .find(|c| &c.id == id)
            .cloned())
    }

    fn list_categories_by_ids(&self, ids: &[CategoryId]) -> RepositoryResult<Vec<Category>> {
        self.touch()?;
        Ok(self
            .categories
            .borrow()
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }
}

impl CategoryWriter for TestRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        self.touch()?;
        let created = self.build_category(category);
        self.categories.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn create_categories(&self, categories: &[NewCategory]) -> RepositoryResult<Vec<Category>> {
        self.touch()?;
        let created = categories
            .iter()
            .map(|c| self.build_category(c))
            .collect::<Vec<_>>();
        self.categories.borrow_mut().extend(created.iter().cloned());
        Ok(created)
    }

    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<usize> {
        self.touch()?;
        let mut categories = self.categories.borrow_mut();
        let before = categories.len();
        categories.retain(|c| &c.id != id);
        Ok(before - categories.len())
    }
}

impl PlaceReader for TestRepository {
    fn list_places(&self, query: PlaceListQuery) -> RepositoryResult<Vec<Place>> {
        self.touch()?;
        let mut items = self.places();
        if let Some(category_id) = &query.category_id {
            items.retain(|p| p.category_id.as_ref() == Some(category_id));
        }
        if let Some(name) = &query.name {
            let name = name.to_lowercase();
            items.retain(|p| p.name.to_lowercase().contains(&name));
        }
        if let Some(pagination) = &query.pagination {
            items = items
                .into_iter()
                .skip(pagination.offset() as usize)
                .take(pagination.per_page)
                .collect();
        }
        Ok(items)
    }

    fn get_place_by_id(&self, id: &PlaceId) -> RepositoryResult<Option<Place>> {
        self.touch()?;
        Ok(self.places.borrow().iter().find(|p| &p.id == id).cloned())
    }

    fn list_ranked_places(&self, pagination: Pagination) -> RepositoryResult<Vec<Place>> {
        self.touch()?;
        let reviews = self.reviews.borrow();
        let mut items = self
            .places()
            .into_iter()
            .map(|mut place| {
                let ratings = reviews
                    .iter()
                    .filter(|r| r.place_id == place.id)
                    .map(|r| f64::from(r.rating.get()))
                    .collect::<Vec<_>>();
                if !ratings.is_empty() {
                    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
                    place.average_rating = Some(AverageRating::new(mean).unwrap());
                }
                place
            })
            .collect::<Vec<_>>();
        // Stable sort keeps insertion order among equal averages.
        items.sort_by(|a, b| {
            let a = a.average_rating.map(AverageRating::get);
            let b = b.average_rating.map(AverageRating::get);
            b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(items
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.per_page)
            .collect())
    }
}

impl PlaceWriter for TestRepository {
    fn create_place(&self, place: &NewPlace) -> RepositoryResult<Place> {
        self.touch()?;
        let id = PlaceId::new(self.generate_id()).unwrap();
        let created = self.build_place(id, place);
        self.places.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn create_places(&self, places: &[NewPlace]) -> RepositoryResult<Vec<Place>> {
        self.touch()?;
        let created = places
            .iter()
            .map(|p| self.build_place(PlaceId::new(self.generate_id()).unwrap(), p))
            .collect::<Vec<_>>();
        self.places.borrow_mut().extend(created.iter().cloned());
        Ok(created)
    }

    fn replace_place(&self, id: &PlaceId, place: &NewPlace) -> RepositoryResult<usize> {
        self.touch()?;
        let replacement = self.build_place(id.clone(), place);
        let mut places = self.places.borrow_mut();
        match places.iter_mut().find(|p| &p.id == id) {
            Some(existing) => {
                *existing = replacement;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_place(&self, id: &PlaceId) -> RepositoryResult<usize> {
        self.touch()?;
        let mut places = self.places.borrow_mut();
        let before = places.len();
        places.retain(|p| &p.id != id);
        Ok(before - places.len())
    }
}

impl ReviewReader for TestRepository {
    fn list_reviews(&self, query: ReviewListQuery) -> RepositoryResult<Vec<Review>> {
        self.touch()?;
        let mut items = self.reviews();
        if let Some(place_id) = &query.place_id {
            items.retain(|r| &r.place_id == place_id);
        }
        if query.newest_first {
            items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        Ok(items)
    }

    fn get_review_by_id(&self, id: &ReviewId) -> RepositoryResult<Option<Review>> {
        self.touch()?;
        Ok(self.reviews.borrow().iter().find(|r| &r.id == id).cloned())
    }
}

impl ReviewWriter for TestRepository {
    fn create_review(&self, review: &NewReview) -> RepositoryResult<Review> {
        self.touch()?;
        let id = ReviewId::new(self.generate_id()).unwrap();
        let created = self.build_review(id, review);
        self.reviews.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn create_reviews(&self, reviews: &[NewReview]) -> RepositoryResult<Vec<Review>> {
        self.touch()?;
        let created = reviews
            .iter()
            .map(|r| self.build_review(ReviewId::new(self.generate_id()).unwrap(), r))
            .collect::<Vec<_>>();
        self.reviews.borrow_mut().extend(created.iter().cloned());
        Ok(created)
    }

    fn replace_review(&self, id: &ReviewId, review: &NewReview) -> RepositoryResult<usize> {
        self.touch()?;
        let replacement = self.build_review(id.clone(), review);
        let mut reviews = self.reviews.borrow_mut();
        match reviews.iter_mut().find(|r| &r.id == id) {
            Some(existing) => {
                *existing = replacement;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete_review(&self, id: &ReviewId) -> RepositoryResult<usize> {
        self.touch()?;
        let mut reviews = self.reviews.borrow_mut();
        let before = reviews.len();
        reviews.retain(|r| &r.id != id);
        Ok(before - reviews.len())
    }
}
