use diesel::prelude::*;
use diesel::sql_types::{Double, Nullable, Text};

use crate::domain::place::{NewPlace as DomainNewPlace, Place as DomainPlace};
use crate::domain::types::{
    AverageRating, CategoryId, ImageUrl, OpeningHours, PlaceAddress, PlaceDescription, PlaceId,
    PlaceName, TypeConstraintError,
};

/// Diesel model representing the `places` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::places)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub opening_hours: String,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
}

/// Insertable/replaceable form of [`Place`].
///
/// `None` is written as `NULL` in both directions so that a replace clears
/// optional columns.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::places)]
#[diesel(treat_none_as_default_value = false, treat_none_as_null = true)]
pub struct NewPlace {
    pub name: String,
    pub description: String,
    pub address: String,
    pub opening_hours: String,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
}

/// Row produced by the rating aggregation over `places` and `reviews`.
#[derive(Debug, Clone, QueryableByName)]
pub struct RankedPlace {
    #[diesel(sql_type = Text)]
    pub id: String,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub description: String,
    #[diesel(sql_type = Text)]
    pub address: String,
    #[diesel(sql_type = Text)]
    pub opening_hours: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub category_id: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub image_url: Option<String>,
    #[diesel(sql_type = Nullable<Double>)]
    pub average_rating: Option<f64>,
}

fn optional_category_id(value: Option<String>) -> Result<Option<CategoryId>, TypeConstraintError> {
    value
        .filter(|id| !id.trim().is_empty())
        .map(CategoryId::new)
        .transpose()
}

impl TryFrom<Place> for DomainPlace {
    type Error = TypeConstraintError;

    fn try_from(place: Place) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PlaceId::new(place.id)?,
            name: PlaceName::new(place.name)?,
            description: PlaceDescription::new(place.description)?,
            address: PlaceAddress::new(place.address)?,
            opening_hours: OpeningHours::new(place.opening_hours)?,
            category_id: optional_category_id(place.category_id)?,
            image_url: place.image_url.map(ImageUrl::new).transpose()?,
            average_rating: None,
            category: None,
        })
    }
}

impl TryFrom<RankedPlace> for DomainPlace {
    type Error = TypeConstraintError;

    fn try_from(place: RankedPlace) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PlaceId::new(place.id)?,
            name: PlaceName::new(place.name)?,
            description: PlaceDescription::new(place.description)?,
            address: PlaceAddress::new(place.address)?,
            opening_hours: OpeningHours::new(place.opening_hours)?,
            category_id: optional_category_id(place.category_id)?,
            image_url: place.image_url.map(ImageUrl::new).transpose()?,
            average_rating: place.average_rating.map(AverageRating::new).transpose()?,
            category: None,
        })
    }
}

impl From<&DomainNewPlace> for NewPlace {
    fn from(place: &DomainNewPlace) -> Self {
        Self {
            name: place.name.as_str().to_string(),
            description: place.description.as_str().to_string(),
            address: place.address.as_str().to_string(),
            opening_hours: place.opening_hours.as_str().to_string(),
            category_id: place.category_id.as_ref().map(|id| id.as_str().to_string()),
            image_url: place.image_url.as_ref().map(|url| url.as_str().to_string()),
        }
    }
}
