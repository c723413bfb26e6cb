//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateUrl;

/// Lowest rating a review may carry.
pub const MIN_RATING: i32 = 0;
/// Highest rating a review may carry.
pub const MAX_RATING: i32 = 5;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A numeric value required to be positive was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
    /// Review rating outside of the accepted scale.
    #[error("rating must be between {MIN_RATING} and {MAX_RATING}")]
    RatingOutOfRange,
    /// Average rating was not a finite value on the rating scale.
    #[error("average rating must be between {MIN_RATING} and {MAX_RATING}")]
    InvalidAverageRating,
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Generates a newtype over a trimmed, non-empty string.
///
/// Used both for opaque store identifiers and for required text fields.
macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

non_empty_string_newtype!(
    CategoryId,
    "Store-generated identifier of a category.",
    "category id"
);
non_empty_string_newtype!(
    PlaceId,
    "Store-generated identifier of a place.",
    "place id"
);
non_empty_string_newtype!(
    ReviewId,
    "Store-generated identifier of a review.",
    "review id"
);

non_empty_string_newtype!(
    CategoryName,
    "Category name enforcing non-empty values.",
    "category name"
);
non_empty_string_newtype!(
    PlaceName,
    "Place name enforcing non-empty values.",
    "place name"
);
non_empty_string_newtype!(
    PlaceDescription,
    "Place description enforcing non-empty values.",
    "description"
);
non_empty_string_newtype!(
    PlaceAddress,
    "Postal address of a place.",
    "address"
);
non_empty_string_newtype!(
    OpeningHours,
    "Free-form opening hours of a place.",
    "opening hours"
);
non_empty_string_newtype!(
    ReviewerName,
    "Display name of the review author.",
    "reviewer name"
);
non_empty_string_newtype!(
    ReviewText,
    "Body text of a review enforcing non-empty values.",
    "review text"
);

/// Place image URL.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Constructs a trimmed URL and validates its format.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "image url")?;
        if !trimmed.as_str().validate_url() {
            return Err(TypeConstraintError::InvalidUrl("image url"));
        }
        Ok(Self(trimmed))
    }

    /// Borrow the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned URL.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ImageUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageUrl> for String {
    fn from(value: ImageUrl) -> Self {
        value.0
    }
}

/// Review rating on the inclusive 0..=5 scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Rating(i32);

impl Rating {
    /// Constructs a rating, rejecting values outside of the scale.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::RatingOutOfRange)
        }
    }

    /// Returns the raw `i32` value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Rating {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i32 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl PartialEq<i32> for Rating {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

/// Mean of the ratings of all reviews attached to a place.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct AverageRating(f64);

impl AverageRating {
    /// Constructs an average, which must be finite and lie on the rating scale.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && (f64::from(MIN_RATING)..=f64::from(MAX_RATING)).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidAverageRating)
        }
    }

    /// Returns the raw `f64` value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for AverageRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for AverageRating {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AverageRating> for f64 {
    fn from(value: AverageRating) -> Self {
        value.0
    }
}

impl PartialEq<f64> for AverageRating {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}
