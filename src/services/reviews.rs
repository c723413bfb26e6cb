use chrono::Utc;

use crate::domain::review::NewReview;
use crate::domain::types::{PlaceId, ReviewId};
use crate::dto::reviews::ReviewDto;
use crate::forms::reviews::ReviewFormPayload;
use crate::repository::{ReviewListQuery, ReviewReader, ReviewWriter};

use super::{ServiceError, ServiceResult};

fn parse_review_id(review_id: &str) -> ServiceResult<ReviewId> {
    ReviewId::new(review_id).map_err(|_| ServiceError::NotFound)
}

fn list_reviews<R>(query: ReviewListQuery, repo: &R) -> ServiceResult<Vec<ReviewDto>>
where
    R: ReviewReader,
{
    match repo.list_reviews(query) {
        Ok(reviews) => Ok(reviews.into_iter().map(ReviewDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list reviews: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn show_reviews<R>(repo: &R) -> ServiceResult<Vec<ReviewDto>>
where
    R: ReviewReader,
{
    list_reviews(ReviewListQuery::default(), repo)
}

/// Reviews of one place, newest first when `sorted` is set.
pub fn show_place_reviews<R>(place_id: &str, sorted: bool, repo: &R) -> ServiceResult<Vec<ReviewDto>>
where
    R: ReviewReader,
{
    let Ok(place_id) = PlaceId::new(place_id) else {
        return Ok(Vec::new());
    };

    let mut query = ReviewListQuery::default().place(place_id);
    if sorted {
        query = query.newest_first();
    }
    list_reviews(query, repo)
}

/// Store a review stamped with the current time.
pub fn add_review<R>(payload: ReviewFormPayload, repo: &R) -> ServiceResult<ReviewDto>
where
    R: ReviewWriter,
{
    let review = payload.into_new_review(Utc::now().naive_utc());
    match repo.create_review(&review) {
        Ok(created) => Ok(created.into()),
        Err(e) => {
            log::error!("Failed to create review: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Store a batch of reviews as a unit, all stamped with the current time.
/// An empty batch is rejected.
pub fn add_reviews<R>(payloads: Vec<ReviewFormPayload>, repo: &R) -> ServiceResult<Vec<ReviewDto>>
where
    R: ReviewWriter,
{
    if payloads.is_empty() {
        return Err(ServiceError::Validation(
            "The list of reviews cannot be empty.".to_string(),
        ));
    }

    let now = Utc::now().naive_utc();
    let reviews = payloads
        .into_iter()
        .map(|payload| payload.into_new_review(now))
        .collect::<Vec<NewReview>>();

    match repo.create_reviews(&reviews) {
        Ok(created) => Ok(created.into_iter().map(ReviewDto::from).collect()),
        Err(e) => {
            log::error!("Failed to create reviews: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Replace a review while keeping its original creation time.
pub fn update_review<R>(review_id: &str, payload: ReviewFormPayload, repo: &R) -> ServiceResult<()>
where
    R: ReviewReader + ReviewWriter,
{
    let review_id = parse_review_id(review_id)?;

    let existing = match repo.get_review_by_id(&review_id) {
        Ok(Some(review)) => review,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get review: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let review = payload.into_new_review(existing.created_at);
    match repo.replace_review(&review_id, &review) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to update review: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_review<R>(review_id: &str, repo: &R) -> ServiceResult<()>
where
    R: ReviewWriter,
{
    let review_id = parse_review_id(review_id)?;

    match repo.delete_review(&review_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete review: {e}");
            Err(ServiceError::Internal)
        }
    }
}
