use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::review::Review;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReviewDto {
    pub id: String,
    pub place_id: String,
    pub reviewer_name: Option<String>,
    pub review_text: String,
    pub rating: i32,
    pub created_at: NaiveDateTime,
}

impl From<Review> for ReviewDto {
    fn from(value: Review) -> Self {
        Self {
            id: value.id.into_inner(),
            place_id: value.place_id.into_inner(),
            reviewer_name: value.reviewer_name.map(|name| name.into_inner()),
            review_text: value.review_text.into_inner(),
            rating: value.rating.get(),
            created_at: value.created_at,
        }
    }
}
