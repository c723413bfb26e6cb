use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{
    AverageRating, CategoryId, ImageUrl, OpeningHours, PlaceAddress, PlaceDescription, PlaceId,
    PlaceName,
};

/// A cafe, restaurant or other venue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub name: PlaceName,
    pub description: PlaceDescription,
    pub address: PlaceAddress,
    pub opening_hours: OpeningHours,
    /// Reference to a category. Not enforced; may point at nothing.
    pub category_id: Option<CategoryId>,
    pub image_url: Option<ImageUrl>,
    /// Mean review rating. Only filled in by the ranking query and `None`
    /// when the place has no reviews.
    pub average_rating: Option<AverageRating>,
    /// Category resolved from `category_id` at read time.
    pub category: Option<Category>,
}

/// Information required to create or fully replace a [`Place`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPlace {
    pub name: PlaceName,
    pub description: PlaceDescription,
    pub address: PlaceAddress,
    pub opening_hours: OpeningHours,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<ImageUrl>,
}
