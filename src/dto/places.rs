use serde::Serialize;

use crate::domain::place::Place;
use crate::domain::types::AverageRating;
use crate::dto::categories::CategoryDto;

/// Full place record with its resolved category, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaceDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub opening_hours: String,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
    pub average_rating: Option<f64>,
    pub category: Option<CategoryDto>,
}

impl From<Place> for PlaceDto {
    fn from(value: Place) -> Self {
        Self {
            id: value.id.into_inner(),
            name: value.name.into_inner(),
            description: value.description.into_inner(),
            address: value.address.into_inner(),
            opening_hours: value.opening_hours.into_inner(),
            category_id: value.category_id.map(|id| id.into_inner()),
            image_url: value.image_url.map(|url| url.into_inner()),
            average_rating: value.average_rating.map(AverageRating::get),
            category: value.category.map(CategoryDto::from),
        }
    }
}

/// Entry of the rating-ordered place listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RankedPlaceDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub opening_hours: String,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
    /// `None` when the place has no reviews.
    pub average_rating: Option<f64>,
}

impl From<Place> for RankedPlaceDto {
    fn from(value: Place) -> Self {
        Self {
            id: value.id.into_inner(),
            name: value.name.into_inner(),
            address: value.address.into_inner(),
            opening_hours: value.opening_hours.into_inner(),
            category_id: value.category_id.map(|id| id.into_inner()),
            image_url: value.image_url.map(|url| url.into_inner()),
            average_rating: value.average_rating.map(AverageRating::get),
        }
    }
}
