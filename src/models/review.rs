use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::review::{NewReview as DomainNewReview, Review as DomainReview};
use crate::domain::types::{
    PlaceId, Rating, ReviewId, ReviewText, ReviewerName, TypeConstraintError,
};

/// Diesel model representing the `reviews` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct Review {
    pub id: String,
    pub place_id: String,
    pub reviewer_name: Option<String>,
    pub review_text: String,
    pub rating: i32,
    pub created_at: NaiveDateTime,
}

/// Insertable/replaceable form of [`Review`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(treat_none_as_default_value = false, treat_none_as_null = true)]
pub struct NewReview {
    pub place_id: String,
    pub reviewer_name: Option<String>,
    pub review_text: String,
    pub rating: i32,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Review> for DomainReview {
    type Error = TypeConstraintError;

    fn try_from(review: Review) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ReviewId::new(review.id)?,
            place_id: PlaceId::new(review.place_id)?,
            reviewer_name: review
                .reviewer_name
                .filter(|name| !name.trim().is_empty())
                .map(ReviewerName::new)
                .transpose()?,
            review_text: ReviewText::new(review.review_text)?,
            rating: Rating::new(review.rating)?,
            created_at: review.created_at,
        })
    }
}

impl From<&DomainNewReview> for NewReview {
    fn from(review: &DomainNewReview) -> Self {
        Self {
            place_id: review.place_id.as_str().to_string(),
            reviewer_name: review
                .reviewer_name
                .as_ref()
                .map(|name| name.as_str().to_string()),
            review_text: review.review_text.as_str().to_string(),
            rating: review.rating.get(),
            created_at: review.created_at,
        }
    }
}
