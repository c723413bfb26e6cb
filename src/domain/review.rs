use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PlaceId, Rating, ReviewId, ReviewText, ReviewerName};

/// A rated text entry attached to a place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub place_id: PlaceId,
    pub reviewer_name: Option<ReviewerName>,
    pub review_text: ReviewText,
    pub rating: Rating,
    /// Assigned when the review is created and never changed afterwards.
    pub created_at: NaiveDateTime,
}

/// Data required to insert or replace a [`Review`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReview {
    pub place_id: PlaceId,
    pub reviewer_name: Option<ReviewerName>,
    pub review_text: ReviewText,
    pub rating: Rating,
    pub created_at: NaiveDateTime,
}
