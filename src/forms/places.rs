use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::place::NewPlace;
use crate::domain::types::{
    CategoryId, ImageUrl, OpeningHours, PlaceAddress, PlaceDescription, PlaceName,
    TypeConstraintError,
};

/// Body of place create and replace requests. A client-supplied `Id` is
/// ignored.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlaceForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub opening_hours: String,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceFormPayload {
    pub name: PlaceName,
    pub description: PlaceDescription,
    pub address: PlaceAddress,
    pub opening_hours: OpeningHours,
    pub category_id: Option<CategoryId>,
    pub image_url: Option<ImageUrl>,
}

impl PlaceFormPayload {
    pub fn into_new_place(self) -> NewPlace {
        NewPlace {
            name: self.name,
            description: self.description,
            address: self.address,
            opening_hours: self.opening_hours,
            category_id: self.category_id,
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Error)]
pub enum PlaceFormError {
    #[error("Place form validation failed: {0}")]
    Validation(String),
    #[error("Place form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for PlaceFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for PlaceFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// Blank optional strings count as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<PlaceForm> for PlaceFormPayload {
    type Error = PlaceFormError;

    fn try_from(value: PlaceForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: PlaceName::new(value.name)?,
            description: PlaceDescription::new(value.description)?,
            address: PlaceAddress::new(value.address)?,
            opening_hours: OpeningHours::new(value.opening_hours)?,
            category_id: non_blank(value.category_id)
                .map(CategoryId::new)
                .transpose()?,
            image_url: non_blank(value.image_url).map(ImageUrl::new).transpose()?,
        })
    }
}
