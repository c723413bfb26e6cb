use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::review::NewReview;
use crate::domain::types::{PlaceId, Rating, ReviewText, ReviewerName, TypeConstraintError};

/// Body of review create and replace requests. Client-supplied `Id` and
/// `CreatedAt` are ignored.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReviewForm {
    #[validate(length(min = 1))]
    pub place_id: String,
    pub reviewer_name: Option<String>,
    #[validate(length(min = 1))]
    pub review_text: String,
    #[validate(range(min = 0, max = 5, message = "Rating must be between 0 and 5."))]
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewFormPayload {
    pub place_id: PlaceId,
    pub reviewer_name: Option<ReviewerName>,
    pub review_text: ReviewText,
    pub rating: Rating,
}

impl ReviewFormPayload {
    /// Builds the record to store, stamped with the given creation time.
    pub fn into_new_review(self, created_at: NaiveDateTime) -> NewReview {
        NewReview {
            place_id: self.place_id,
            reviewer_name: self.reviewer_name,
            review_text: self.review_text,
            rating: self.rating,
            created_at,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReviewFormError {
    #[error("Review form validation failed: {0}")]
    Validation(String),
    #[error("Review form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ReviewFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ReviewFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ReviewForm> for ReviewFormPayload {
    type Error = ReviewFormError;

    fn try_from(value: ReviewForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            place_id: PlaceId::new(value.place_id)?,
            reviewer_name: value
                .reviewer_name
                .filter(|name| !name.trim().is_empty())
                .map(ReviewerName::new)
                .transpose()?,
            review_text: ReviewText::new(value.review_text)?,
            rating: Rating::new(value.rating)?,
        })
    }
}
